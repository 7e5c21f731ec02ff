//! Filesystem-based resolver for native platforms.
//!
//! Relative references are searched in an ordered list of base directories,
//! typically the directory holding the description followed by the
//! directories listed in its `paths` entry.

use folio_traits::PathResolver;
use std::path::{Path, PathBuf};

/// A resolver that searches the local filesystem.
///
/// Absolute paths pass through unchanged. Relative paths are
/// joined to each base directory in order and the first existing candidate
/// wins.
#[derive(Debug, Clone, Default)]
pub struct SearchPathResolver {
    bases: Vec<PathBuf>,
}

impl SearchPathResolver {
    /// Creates a resolver searching only `base`.
    pub fn new<P: AsRef<Path>>(base: P) -> Self {
        Self {
            bases: vec![base.as_ref().to_path_buf()],
        }
    }

    pub fn with_bases<I, P>(bases: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self {
            bases: bases.into_iter().map(|p| p.as_ref().to_path_buf()).collect(),
        }
    }

    /// Appends a base directory, searched after the existing ones.
    pub fn push_base<P: AsRef<Path>>(&mut self, base: P) {
        let base = base.as_ref().to_path_buf();
        if !self.bases.contains(&base) {
            self.bases.push(base);
        }
    }

    /// Returns the base directories in search order.
    pub fn bases(&self) -> &[PathBuf] {
        &self.bases
    }
}

impl PathResolver for SearchPathResolver {
    fn find(&self, path: &str) -> Option<PathBuf> {
        let candidate = Path::new(path);
        if candidate.is_absolute() {
            return Some(candidate.to_path_buf());
        }
        let found = self
            .bases
            .iter()
            .map(|base| base.join(candidate))
            .find(|full| full.exists());
        if found.is_none() {
            log::debug!("'{}' not found in {} search path(s)", path, self.bases.len());
        }
        found
    }

    /// Relative directories are taken relative to the first base (the
    /// directory holding the description).
    fn extend_search(&mut self, dirs: &[String]) -> bool {
        let root = self.bases.first().cloned().unwrap_or_default();
        for dir in dirs {
            self.push_base(root.join(dir));
        }
        true
    }

    fn name(&self) -> &'static str {
        "SearchPathResolver"
    }
}
