//! The external collaborators a document is parsed against.

use crate::fonts::TypesetFontRegistry;
use folio_traits::{FontRegistry, InMemoryPathResolver, PathResolver};

#[derive(Debug)]
pub struct Environment {
    paths: Box<dyn PathResolver>,
    fonts: Box<dyn FontRegistry>,
}

impl Environment {
    pub fn new(paths: Box<dyn PathResolver>, fonts: Box<dyn FontRegistry>) -> Self {
        Self { paths, fonts }
    }

    /// `paths` with the built-in font registry.
    pub fn with_paths(paths: impl PathResolver + 'static) -> Self {
        Self::new(Box::new(paths), Box::new(TypesetFontRegistry::new()))
    }

    pub fn paths(&self) -> &dyn PathResolver {
        self.paths.as_ref()
    }

    pub fn paths_mut(&mut self) -> &mut dyn PathResolver {
        self.paths.as_mut()
    }

    pub fn fonts(&self) -> &dyn FontRegistry {
        self.fonts.as_ref()
    }
}

impl Default for Environment {
    /// No resources at all and the built-in fonts.
    fn default() -> Self {
        Self::with_paths(InMemoryPathResolver::new())
    }
}
