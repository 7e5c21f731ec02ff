//! Resource resolvers for the folio album engine.
//!
//! This crate provides platform-specific implementations of the
//! `PathResolver` trait from folio-traits.
//!
//! ## Available Resolvers
//!
//! - [`SearchPathResolver`]: Searches an ordered list of base directories
//!
//! ## Re-exports
//!
//! For convenience, we also re-export the in-memory resolver from folio-traits:
//! - [`InMemoryPathResolver`]: Pre-populated set of known paths

mod filesystem;

pub use filesystem::SearchPathResolver;

// Re-export the in-memory resolver from folio-traits for convenience
pub use folio_traits::InMemoryPathResolver;
