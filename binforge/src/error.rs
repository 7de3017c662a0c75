//! Error types for the generation pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using GeneratorError.
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Errors that can occur while generating embedded sources.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Input root does not exist or is not a directory.
    #[error("input root '{path}' is not a directory")]
    InputRootNotADirectory { path: PathBuf },

    /// A name has no alphanumeric characters to build an identifier from.
    #[error("cannot derive an identifier from '{name}': no alphanumeric characters")]
    UnusableName { name: String },

    /// Failed to create directory.
    #[error("failed to create directory '{path}': {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed at or below the given path.
    #[error("failed to walk '{path}': {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GeneratorError {
    /// Create a DirectoryCreation error.
    pub fn directory_creation(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryCreation {
            path: path.into(),
            source,
        }
    }

    /// Create a FileRead error.
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a FileWrite error.
    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }
}
