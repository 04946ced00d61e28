//! Error handling for the CLI application

use std::path::PathBuf;
use thiserror::Error;

/// CLI-specific failures that are not plain I/O
#[derive(Error, Debug)]
pub enum CliError {
    /// Wrong number or shape of arguments
    #[error("{0}")]
    Usage(String),

    /// Configuration file could not be parsed
    #[error("invalid configuration in {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    /// `--engine` or the config named an engine that does not exist
    #[error("unknown engine '{0}'")]
    UnknownEngine(String),
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

/// Process exit code for any failure
pub const EXIT_FAILURE: u8 = 1;
