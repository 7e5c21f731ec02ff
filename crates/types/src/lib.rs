pub mod anchor;
pub mod color;
pub mod geometry;

pub use anchor::{Anchor, AnchorOffset};
pub use color::Color;
pub use geometry::{Edge, Length, Rect, Size};
