//! Error types for scaffolding operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scaffolding operations.
pub type InitResult<T> = Result<T, InitError>;

/// Errors that can occur while scaffolding a `.postline/` directory.
#[derive(Debug, Error)]
pub enum InitError {
    /// The .postline directory already exists and force flag was not set.
    #[error(".postline directory already exists at {0:?}. Use force to overwrite.")]
    DirectoryExists(PathBuf),

    /// Failed to render an agent definition to front-matter markdown.
    #[error("Failed to render agent definition '{name}': {source}")]
    Render {
        name: String,
        source: serde_yaml::Error,
    },

    /// Failed to create a directory.
    #[error("Failed to create directory {path:?}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a file.
    #[error("Failed to write file {path:?}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
