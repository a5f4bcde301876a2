//! Error types for plan-fs

use std::path::PathBuf;

/// Result type for plan-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in plan-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found in source: {path}")]
    NotFound { path: String },

    #[error("File is not valid UTF-8: {path}")]
    InvalidUtf8 { path: String },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
