//! Timing harness for comparing regex engines
//!
//! This crate holds the fixed pattern registry, the [`EngineAdapter`] seam
//! that lets any regex engine be plugged in, two bundled adapters, and the
//! [`Harness`] that measures each pattern once and streams report rows.
//!
//! # Example
//!
//! ```rust
//! use rxbench_engine::adapters::RegexEngine;
//! use rxbench_engine::report::TextReport;
//! use rxbench_engine::{Harness, PATTERN_REGISTRY};
//!
//! let haystack = b"[error] see readme.txt\n";
//! let mut report = TextReport::new(Vec::new());
//! let rows = Harness::new(&RegexEngine)
//!     .run(haystack, PATTERN_REGISTRY, &mut report)
//!     .unwrap();
//! assert_eq!(rows, PATTERN_REGISTRY.len());
//! ```

pub mod adapter;
pub mod adapters;
pub mod error;
pub mod harness;
pub mod patterns;
pub mod report;

pub use adapter::{CompiledPattern, EngineAdapter, Match};
pub use error::{CompileError, HarnessError, Result};
pub use harness::{BenchmarkResult, Harness, TimingScope};
pub use patterns::{PatternEntry, PATTERN_REGISTRY};
pub use report::ReportSink;
