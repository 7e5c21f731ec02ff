//! Loading album descriptions from disk or memory.

mod builder;
mod config;

pub use builder::{AlbumLoader, LoadedAlbum};
pub use config::LoaderConfig;
