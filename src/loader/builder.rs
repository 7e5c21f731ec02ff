// src/loader/builder.rs
use super::config::LoaderConfig;
use crate::error::FolioError;
use folio_core::{
    DescriptionParser, Diagnostic, DisplayList, Document, Environment, FontRegistry, Monitor,
    RawValue, Renderer, Severity, TypesetFontRegistry, render_document,
};
use folio_resource::SearchPathResolver;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A builder that reads album descriptions into resolved documents.
#[derive(Debug, Default)]
pub struct AlbumLoader {
    config: LoaderConfig,
    font_registry: Option<Box<dyn FontRegistry>>,
}

impl AlbumLoader {
    /// Creates a loader with default settings: strict, built-in fonts.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: LoaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Adds a base directory searched after the description's directory.
    pub fn with_search_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.search_paths.push(path.as_ref().to_path_buf());
        self
    }

    /// Whether any reported error fails the load.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.config.strict = strict;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.config.quiet = quiet;
        self
    }

    /// Replaces the built-in font families.
    pub fn with_font_registry(mut self, registry: impl FontRegistry + 'static) -> Self {
        self.font_registry = Some(Box::new(registry));
        self
    }

    /// Treats a built-in font as not installed. Has no effect on a registry
    /// given through `with_font_registry`.
    pub fn with_unavailable_font(mut self, key: &str) -> Self {
        self.config.unavailable_fonts.push(key.to_string());
        self
    }

    /// Reads and parses the description at `path`. Relative resources are
    /// searched from the file's directory first.
    pub fn load_file<P: AsRef<Path>>(self, path: P) -> Result<LoadedAlbum, FolioError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            FolioError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read album from '{}': {}", path_ref.display(), e),
            ))
        })?;
        let base = path_ref.parent().unwrap_or_else(|| Path::new("")).to_path_buf();
        let file_name = path_ref
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path_ref.display().to_string());
        self.load_str(&source, base, &file_name)
    }

    /// Parses a JSON description. `base` anchors relative resource paths.
    pub fn load_str<P: AsRef<Path>>(
        self,
        source: &str,
        base: P,
        file_name: &str,
    ) -> Result<LoadedAlbum, FolioError> {
        let description: RawValue = serde_json::from_str(source)?;
        self.load_value(&description, base, file_name)
    }

    pub fn load_value<P: AsRef<Path>>(
        self,
        description: &RawValue,
        base: P,
        file_name: &str,
    ) -> Result<LoadedAlbum, FolioError> {
        let LoaderConfig {
            search_paths,
            strict,
            quiet,
            unavailable_fonts,
        } = self.config;

        let mut bases: Vec<PathBuf> = vec![base.as_ref().to_path_buf()];
        bases.extend(search_paths);
        let resolver = SearchPathResolver::with_bases(bases);

        let fonts = match self.font_registry {
            Some(registry) => registry,
            None => {
                let mut registry = TypesetFontRegistry::new();
                for key in &unavailable_fonts {
                    if !registry.mark_unavailable(key) {
                        log::warn!("Cannot mark unknown font '{}' as unavailable", key);
                    }
                }
                Box::new(registry)
            }
        };

        let mut env = Environment::new(Box::new(resolver), fonts);
        let mut monitor = if quiet { Monitor::quiet() } else { Monitor::new() };
        let document = DescriptionParser::new(&mut env, &mut monitor).parse(file_name, description);

        if strict && monitor.has_errors() {
            return Err(FolioError::Invalid {
                file: file_name.to_string(),
                errors: monitor.errors().cloned().collect(),
            });
        }
        log::debug!(
            "Loaded {} with {} diagnostic(s)",
            file_name,
            monitor.diagnostics().len()
        );
        Ok(LoadedAlbum {
            document,
            diagnostics: monitor.into_diagnostics(),
        })
    }
}

/// A parsed album with everything reported while reading it.
#[derive(Debug)]
pub struct LoadedAlbum {
    pub document: Document,
    pub diagnostics: Vec<Diagnostic>,
}

impl LoadedAlbum {
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.of(Severity::Warning)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.of(Severity::Error)
    }

    fn of(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |diagnostic| diagnostic.severity == severity)
    }

    pub fn render(&self, renderer: &mut dyn Renderer) -> Result<(), FolioError> {
        render_document(&self.document, renderer)?;
        Ok(())
    }

    /// Renders into a recording [`DisplayList`].
    pub fn display_list(&self) -> Result<DisplayList, FolioError> {
        let mut list = DisplayList::new();
        self.render(&mut list)?;
        Ok(list)
    }
}
