//! Report sinks
//!
//! A sink receives the run header once, then one row per measured pattern as
//! soon as it is available. Sinks that write to a stream flush every row.

use crate::harness::BenchmarkResult;
use std::io;

pub mod json;
pub mod text;

pub use json::JsonReport;
pub use text::TextReport;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Size of `bytes` in binary megabytes
pub fn megabytes(bytes: usize) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Destination for benchmark rows
pub trait ReportSink {
    /// Called once before any row
    fn begin(&mut self, engine_label: &str, input_len: usize) -> io::Result<()>;

    /// Called once per measured pattern, in registry order
    fn row(&mut self, result: &BenchmarkResult) -> io::Result<()>;

    /// Called after the last row of a successful run
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Keeps everything in memory; handy for tests and for callers that post-process
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub header: Option<(String, usize)>,
    pub results: Vec<BenchmarkResult>,
    pub finished: bool,
}

impl ReportSink for CollectingSink {
    fn begin(&mut self, engine_label: &str, input_len: usize) -> io::Result<()> {
        self.header = Some((engine_label.to_string(), input_len));
        Ok(())
    }

    fn row(&mut self, result: &BenchmarkResult) -> io::Result<()> {
        self.results.push(result.clone());
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_megabytes() {
        assert_eq!(megabytes(0), 0.0);
        assert_eq!(megabytes(1024 * 1024), 1.0);
        assert_eq!(megabytes(3 * 512 * 1024), 1.5);
    }
}
