//! Plain-text table output

use super::{megabytes, ReportSink};
use crate::harness::BenchmarkResult;
use std::io::{self, Write};

/// Width of the pattern-name column
pub const NAME_WIDTH: usize = 15;

const SEPARATOR_WIDTH: usize = 41;

/// Fixed-width table: a header with the input size, a rule, one row per pattern
pub struct TextReport<W: Write> {
    writer: W,
}

impl<W: Write> TextReport<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextReport<io::Stdout> {
    /// Report that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

/// One table row, without the trailing newline
pub fn format_row(result: &BenchmarkResult) -> String {
    format!(
        "{:<width$} {:>10.2} ms  {:>6} matches",
        result.name,
        result.elapsed_ms(),
        result.match_count,
        width = NAME_WIDTH
    )
}

impl<W: Write> ReportSink for TextReport<W> {
    fn begin(&mut self, engine_label: &str, input_len: usize) -> io::Result<()> {
        writeln!(
            self.writer,
            "{engine_label} (input: {:.2} MB)",
            megabytes(input_len)
        )?;
        writeln!(self.writer, "{}", "─".repeat(SEPARATOR_WIDTH))?;
        self.writer.flush()
    }

    fn row(&mut self, result: &BenchmarkResult) -> io::Result<()> {
        writeln!(self.writer, "{}", format_row(result))?;
        self.writer.flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
