//! Error types for the benchmark harness

use thiserror::Error;

/// A pattern the engine refused to compile
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to compile pattern '{pattern}': {reason}")]
pub struct CompileError {
    /// The pattern source as given to the engine
    pub pattern: String,
    /// Engine-specific explanation
    pub reason: String,
}

impl CompileError {
    pub fn new(pattern: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }
}

/// Errors that abort a benchmark run
#[derive(Error, Debug)]
pub enum HarnessError {
    /// A registry pattern did not compile. The registry is fixed, so this is
    /// a defect rather than a runtime condition.
    #[error("pattern '{name}' did not compile")]
    Compile {
        /// Registry name of the pattern
        name: String,
        #[source]
        source: CompileError,
    },

    /// A pattern name that is not in the registry
    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),

    /// Writing a report row failed
    #[error("failed to write report")]
    Report(#[from] std::io::Error),
}

/// Result type for harness operations
pub type Result<T> = std::result::Result<T, HarnessError>;
