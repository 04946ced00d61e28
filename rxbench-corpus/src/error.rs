//! Error types for corpus generation

use std::path::PathBuf;
use thiserror::Error;

/// Errors from corpus configuration and persistence
#[derive(Error, Debug)]
pub enum CorpusError {
    /// Parent directory could not be created
    #[error("failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Corpus file could not be written
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generator settings out of range
    #[error("invalid generator configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for corpus operations
pub type Result<T> = std::result::Result<T, CorpusError>;
