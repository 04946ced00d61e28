//! JSON Lines output

use super::ReportSink;
use crate::harness::BenchmarkResult;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// First line of a JSON report
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct JsonHeader {
    pub engine: String,
    pub input_bytes: usize,
}

/// One measured pattern
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct JsonRow {
    pub name: String,
    pub elapsed_ms: f64,
    pub matches: usize,
}

impl From<&BenchmarkResult> for JsonRow {
    fn from(result: &BenchmarkResult) -> Self {
        Self {
            name: result.name.clone(),
            elapsed_ms: result.elapsed_ms(),
            matches: result.match_count,
        }
    }
}

/// Writes one JSON object per line so partial runs stay parseable
pub struct JsonReport<W: Write> {
    writer: W,
}

impl<W: Write> JsonReport<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, value)?;
        writeln!(self.writer)?;
        self.writer.flush()
    }
}

impl JsonReport<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ReportSink for JsonReport<W> {
    fn begin(&mut self, engine_label: &str, input_len: usize) -> io::Result<()> {
        self.write_line(&JsonHeader {
            engine: engine_label.to_string(),
            input_bytes: input_len,
        })
    }

    fn row(&mut self, result: &BenchmarkResult) -> io::Result<()> {
        self.write_line(&JsonRow::from(result))
    }
}
