pub mod diagnostics;
pub mod font;
pub mod resource;

pub use diagnostics::{Diagnostic, DiagnosticSink, Monitor, Severity};
pub use font::{FontHandle, FontRegistry, normalize_font_name};
pub use resource::{InMemoryPathResolver, PathResolver};
