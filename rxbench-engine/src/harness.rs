//! Single-sample timing harness
//!
//! Every pattern is compiled and run exactly once. Each result goes to the
//! report sink as soon as it is measured, so rows written before a failure
//! survive it.

use crate::adapter::EngineAdapter;
use crate::error::{HarnessError, Result};
use crate::patterns::PatternEntry;
use crate::report::ReportSink;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Which calls the clock covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimingScope {
    /// Only the find-all call
    #[default]
    Match,
    /// Compilation plus the find-all call
    CompileAndMatch,
}

impl TimingScope {
    pub fn as_str(self) -> &'static str {
        match self {
            TimingScope::Match => "match",
            TimingScope::CompileAndMatch => "compile-and-match",
        }
    }
}

impl fmt::Display for TimingScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimingScope {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "match" => Ok(TimingScope::Match),
            "compile-and-match" => Ok(TimingScope::CompileAndMatch),
            other => Err(format!("unknown timing scope '{other}'")),
        }
    }
}

/// Outcome of measuring one pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkResult {
    pub name: String,
    pub elapsed: Duration,
    pub match_count: usize,
}

impl BenchmarkResult {
    /// Elapsed time in fractional milliseconds
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Drives one engine over a haystack
pub struct Harness<'e> {
    engine: &'e dyn EngineAdapter,
    timing: TimingScope,
}

impl<'e> Harness<'e> {
    pub fn new(engine: &'e dyn EngineAdapter) -> Self {
        Self {
            engine,
            timing: TimingScope::default(),
        }
    }

    pub fn with_timing(mut self, timing: TimingScope) -> Self {
        self.timing = timing;
        self
    }

    pub fn engine(&self) -> &dyn EngineAdapter {
        self.engine
    }

    pub fn timing(&self) -> TimingScope {
        self.timing
    }

    /// Compile `entry` and time one find-all pass over `haystack`
    pub fn measure(&self, haystack: &[u8], entry: &PatternEntry) -> Result<BenchmarkResult> {
        let compile_start = Instant::now();
        let compiled = self
            .engine
            .compile(entry.source)
            .map_err(|source| HarnessError::Compile {
                name: entry.name.to_string(),
                source,
            })?;

        let match_start = Instant::now();
        let matches = compiled.find_all_non_overlapping(haystack);
        let match_end = Instant::now();

        let elapsed = match self.timing {
            TimingScope::Match => match_end - match_start,
            TimingScope::CompileAndMatch => match_end - compile_start,
        };

        log::debug!(
            "{}/{}: {} matches in {:?} (compile {:?})",
            self.engine.name(),
            entry.name,
            matches.len(),
            elapsed,
            match_start - compile_start
        );

        Ok(BenchmarkResult {
            name: entry.name.to_string(),
            elapsed,
            match_count: matches.len(),
        })
    }

    /// Measure every entry in order, streaming each row to `sink`.
    ///
    /// Returns the number of rows written. The first compile failure aborts the
    /// run; rows already written stay written.
    pub fn run<'p, I>(
        &self,
        haystack: &[u8],
        entries: I,
        sink: &mut dyn ReportSink,
    ) -> Result<usize>
    where
        I: IntoIterator<Item = &'p PatternEntry>,
    {
        log::info!(
            "benchmarking {} over {} bytes (timing: {})",
            self.engine.name(),
            haystack.len(),
            self.timing
        );

        sink.begin(self.engine.label(), haystack.len())?;
        let mut rows = 0;
        for entry in entries {
            let result = self.measure(haystack, entry)?;
            sink.row(&result)?;
            rows += 1;
        }
        sink.finish()?;

        Ok(rows)
    }
}
