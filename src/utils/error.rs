//! Error types for dataset preparation.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for dataset preparation operations
#[derive(Error, Debug)]
pub enum Error {
    /// Source directory missing or not a directory
    #[error("Source directory not found: {0}")]
    SourceNotFound(PathBuf),

    /// An individual file copy failed; fatal, no rollback
    #[error("Failed to copy '{src}' to '{dst}': {source}")]
    Copy {
        src: PathBuf,
        dst: PathBuf,
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Specialized Result type for dataset preparation operations
pub type Result<T> = std::result::Result<T, Error>;
