//! # folio-core
//!
//! Platform-agnostic album core.
//!
//! This crate turns an album description into a resolved document:
//! - **property**: property descriptors, value grammars and the catalog
//! - **document**: the node arena and cascade resolution
//! - **parser**: the description walk (indexed keys, styles, defaults)
//! - **snapshot**: per-node resolved styles handed to renderers
//! - **render**: the two-pass `Renderer` driver and the `DisplayList` backend
//!
//! ## Design Principle
//!
//! This crate has **no platform dependencies**:
//! - No filesystem access (`std::fs`)
//! - No font discovery
//!
//! Resource lookup, font availability and diagnostics go through the traits
//! of `folio-traits`, which implementors fulfill for their platform.

// Re-export foundation crates
pub use folio_style as style_types;
pub use folio_traits as traits;
pub use folio_types as types_base;

pub mod document;
pub mod env;
pub mod error;
pub mod fonts;
pub mod kinds;
pub mod layout;
pub mod parser;
pub mod property;
pub mod render;
pub mod snapshot;
pub mod value;

// Re-export commonly used types from foundation crates
pub use style_types::{BorderStyle, FitMode, FontSize, PageFormat, Shadow};
pub use types_base::{Anchor, Color, Length, Rect};

// Re-export from internal modules
pub use document::{Document, Lookup, NodeId};
pub use env::Environment;
pub use error::{ResolutionError, StructureError, ValidationError};
pub use fonts::TypesetFontRegistry;
pub use kinds::NodeKind;
pub use layout::PageLayout;
pub use parser::DescriptionParser;
pub use property::{Mode, Property, PropertyId, ValueType};
pub use render::{DisplayList, DrawCommand, RenderError, Renderer, render_document};
pub use snapshot::{ImageStyle, PageStyle, Placement, Snapshot, TextStyle};
pub use value::{FromValue, RawValue, Resource, Value};

// Re-export platform abstraction traits
pub use traits::{
    Diagnostic, DiagnosticSink, FontHandle, FontRegistry, InMemoryPathResolver, Monitor,
    PathResolver, Severity,
};
