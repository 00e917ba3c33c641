use std::path::{Path, PathBuf};

use thiserror::Error;

/// Submit was attempted without at least one thumbnail and some non-blank news text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Upload photos and add news!")]
pub struct ValidationError;

/// A selected file could not be turned into a thumbnail.
#[derive(Debug, Error)]
#[error("Error loading image: {file_name}")]
pub struct DecodeError {
    /// Full path as returned by the picker.
    pub path: PathBuf,
    /// File name shown to the user.
    pub file_name: String,
    #[source]
    pub source: anyhow::Error,
}

impl DecodeError {
    pub fn new(path: &Path, source: anyhow::Error) -> Self {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            path: path.to_path_buf(),
            file_name,
            source,
        }
    }
}
