//! Engine adapter traits
//!
//! The harness never talks to a regex library directly. Each engine is wrapped
//! in an [`EngineAdapter`] that compiles pattern sources into
//! [`CompiledPattern`]s; any engine that can report non-overlapping match
//! spans over a byte buffer can be benchmarked.

use crate::error::CompileError;
use serde::Serialize;
use std::fmt;

/// Half-open byte span `[start, end)` of one match
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Match {
    pub start: usize,
    pub end: usize,
}

impl Match {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A pattern compiled by some engine
pub trait CompiledPattern {
    /// All leftmost non-overlapping matches in `haystack`, in order
    fn find_all_non_overlapping(&self, haystack: &[u8]) -> Vec<Match>;
}

/// A regex engine the harness can drive
pub trait EngineAdapter {
    /// Short identifier, e.g. for `--engine`
    fn name(&self) -> &'static str;

    /// Human-readable label printed in report headers
    fn label(&self) -> &'static str {
        self.name()
    }

    /// Compile `source` into a reusable matcher
    fn compile(&self, source: &str) -> Result<Box<dyn CompiledPattern>, CompileError>;
}
