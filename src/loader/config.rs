use std::path::PathBuf;

/// Settings of an [`AlbumLoader`](super::AlbumLoader).
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Extra base directories, searched after the description's own directory.
    pub search_paths: Vec<PathBuf>,
    /// Fail the load when any error was reported. With `false` the partial
    /// document is returned along with its diagnostics.
    pub strict: bool,
    /// Record diagnostics without mirroring them to the log.
    pub quiet: bool,
    /// Keys of built-in fonts to treat as not installed.
    pub unavailable_fonts: Vec<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            search_paths: Vec::new(),
            strict: true,
            quiet: false,
            unavailable_fonts: Vec::new(),
        }
    }
}
