#![allow(dead_code)]

pub mod fixtures;

use folio::{AlbumLoader, FolioError, LoadedAlbum, NodeId};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// A temporary directory holding empty image files.
pub struct Gallery {
    pub dir: TempDir,
}

impl Gallery {
    /// Creates the listed files, including their parent directories.
    pub fn with_images(names: &[&str]) -> io::Result<Self> {
        let dir = tempfile::tempdir()?;
        for name in names {
            let path = dir.path().join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, b"")?;
        }
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn loader(&self) -> AlbumLoader {
        AlbumLoader::new().with_quiet(true)
    }

    /// Loads in strict mode, resolving images against the gallery.
    pub fn load(&self, description: &Value) -> Result<LoadedAlbum, FolioError> {
        self.loader().load_value(description, self.path(), "album.json")
    }

    pub fn load_lenient(&self, description: &Value) -> Result<LoadedAlbum, FolioError> {
        self.loader()
            .with_strict(false)
            .load_value(description, self.path(), "album.json")
    }

    /// Writes the description next to the images and returns its path.
    pub fn write_album(&self, description: &Value) -> io::Result<PathBuf> {
        let path = self.path().join("album.json");
        fs::write(&path, serde_json::to_string_pretty(description)?)?;
        Ok(path)
    }
}

pub fn page(album: &LoadedAlbum, index: usize) -> NodeId {
    album.document.pages()[index]
}

pub fn frame(album: &LoadedAlbum, page_index: usize, item: usize) -> NodeId {
    album.document.children(page(album, page_index))[item]
}

pub fn warnings(album: &LoadedAlbum) -> Vec<String> {
    album.warnings().map(|d| d.message.clone()).collect()
}

pub fn errors(album: &LoadedAlbum) -> Vec<String> {
    album.errors().map(|d| d.message.clone()).collect()
}

/// The error messages of a rejected strict load.
pub fn rejection(result: Result<LoadedAlbum, FolioError>) -> Vec<String> {
    match result {
        Err(FolioError::Invalid { errors, .. }) => errors.into_iter().map(|d| d.message).collect(),
        Err(other) => panic!("expected an invalid album, got {}", other),
        Ok(_) => panic!("expected an invalid album, got a loaded one"),
    }
}
