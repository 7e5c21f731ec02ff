//! PathResolver trait for abstracting resource lookup.
//!
//! The engine never touches the filesystem directly: image references found
//! in a description are resolved through a `PathResolver`.

use std::collections::HashSet;
use std::fmt::Debug;
use std::path::{Path, PathBuf};

/// A trait for locating resources referenced by a description.
///
/// # Implementations
///
/// - `SearchPathResolver` (folio-resource): ordered list of base directories
/// - `InMemoryPathResolver`: a fixed set of known paths (always available)
pub trait PathResolver: Debug {
    /// Finds `path`. Relative paths are searched in the resolver's base
    /// directories.
    fn find(&self, path: &str) -> Option<PathBuf>;

    /// Adds directories declared by the description itself. Returns `false`
    /// when the resolver has no notion of search directories.
    fn extend_search(&mut self, _dirs: &[String]) -> bool {
        false
    }

    /// Returns a human-readable name for this resolver (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// A resolver over a pre-populated set of paths.
///
/// Useful for tests and for descriptions whose resources are generated.
#[derive(Debug, Default, Clone)]
pub struct InMemoryPathResolver {
    paths: HashSet<PathBuf>,
}

impl InMemoryPathResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn add(&mut self, path: impl Into<PathBuf>) {
        self.paths.insert(path.into());
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl PathResolver for InMemoryPathResolver {
    fn find(&self, path: &str) -> Option<PathBuf> {
        let candidate = Path::new(path);
        self.paths
            .contains(candidate)
            .then(|| candidate.to_path_buf())
    }

    fn name(&self) -> &'static str {
        "InMemoryPathResolver"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_lookup() {
        let resolver = InMemoryPathResolver::with_paths(["photos/a.jpg", "b.png"]);
        assert_eq!(resolver.len(), 2);
        assert_eq!(resolver.find("b.png"), Some(PathBuf::from("b.png")));
        assert_eq!(resolver.find("c.png"), None);
    }
}
