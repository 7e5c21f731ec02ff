// src/error.rs
use folio_core::{Diagnostic, RenderError};
use thiserror::Error;

/// Top-level error of loading and rendering an album.
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{file} is invalid: {count} error(s)", count = .errors.len())]
    Invalid {
        file: String,
        errors: Vec<Diagnostic>,
    },

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),
}
