pub mod border;
pub mod colors;
pub mod font;
pub mod format;
pub mod image;
pub mod parsers;
pub mod symbol;

pub use border::{BorderStyle, BorderWidth, LineWidth};
pub use colors::{lookup_named_color, normalize_color_name};
pub use font::FontSize;
pub use format::{Margins, PageFormat};
pub use image::{FitMode, Orientation, Shadow};
pub use parsers::StyleParseError;
pub use symbol::{Symbolic, normalize_symbol};
