//! # folio
//!
//! Photo album generator. An album description (JSON) lists pages, their
//! layouts, images and captions, and the style properties that decorate
//! them. `folio` validates the description, resolves every property through
//! the cascade and hands the resolved pages to a [`Renderer`].
//!
//! ```no_run
//! use folio::AlbumLoader;
//!
//! let album = AlbumLoader::new().load_file("album.json")?;
//! for warning in album.warnings() {
//!     eprintln!("{}", warning);
//! }
//! let pages = album.display_list()?;
//! println!("{} page(s)", pages.page_count());
//! # Ok::<(), folio::FolioError>(())
//! ```

pub mod error;
pub mod loader;

pub use error::FolioError;
pub use loader::{AlbumLoader, LoadedAlbum, LoaderConfig};

// Re-export the album model for library users
pub use folio_core::{
    Anchor, BorderStyle, Color, Diagnostic, DisplayList, Document, DrawCommand, FitMode,
    FontHandle, FontRegistry, FontSize, ImageStyle, Length, NodeId, PageFormat, PageLayout,
    PageStyle, Placement, Rect, RenderError, Renderer, Resource, Severity, Shadow, Snapshot,
    TextStyle, TypesetFontRegistry, Value, property,
};
pub use folio_resource::SearchPathResolver;
