//! Benchmark command implementation

use crate::config::{EngineChoice, ReportFormat, RxbenchConfig};
use crate::input::FileReader;
use crate::logging;
use anyhow::{Context, Result};
use clap::Parser;
use rxbench_engine::report::{JsonReport, ReportSink, TextReport};
use rxbench_engine::{patterns, Harness, TimingScope};
use std::io::Write;
use std::path::PathBuf;

/// Short usage line printed on argument errors
pub const USAGE: &str = "Usage: rxbench <input-file>";

/// Time every registry pattern once over a corpus file
#[derive(Debug, Parser)]
#[command(name = "rxbench", version, about, long_about = None)]
pub struct BenchArgs {
    /// Corpus file to search
    #[arg(value_name = "INPUT-FILE")]
    pub input: PathBuf,

    /// Regex engine to benchmark
    #[arg(short, long, value_enum, env = "RXBENCH_ENGINE")]
    pub engine: Option<EngineChoice>,

    /// Report format
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// What the clock covers: "match" or "compile-and-match"
    #[arg(short, long, value_name = "SCOPE")]
    pub timing: Option<TimingScope>,

    /// Only run the named pattern (repeatable)
    #[arg(short, long = "pattern", value_name = "NAME")]
    pub patterns: Vec<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "RXBENCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl BenchArgs {
    /// Execute the benchmark, writing the report to stdout
    pub fn execute(&self) -> Result<()> {
        let stdout = std::io::stdout();
        self.execute_to(stdout.lock())
    }

    /// Execute the benchmark, writing the report to `out`
    pub fn execute_to<W: Write>(&self, out: W) -> Result<()> {
        logging::init(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let config = RxbenchConfig::load_or_default(self.config.as_deref())?.benchmark;
        let engine_choice = self.engine.unwrap_or(config.engine);
        let format = self.format.unwrap_or(config.format);
        let timing = self.timing.unwrap_or(config.timing);
        let names = if self.patterns.is_empty() {
            config.patterns.as_slice()
        } else {
            self.patterns.as_slice()
        };

        // Validate the filter before touching the input file.
        let entries = patterns::select(names)?;
        let engine = engine_choice.adapter()?;
        let data = FileReader::read_bytes(&self.input)?;

        let mut sink: Box<dyn ReportSink + '_> = match format {
            ReportFormat::Text => Box::new(TextReport::new(out)),
            ReportFormat::Json => Box::new(JsonReport::new(out)),
        };

        let rows = Harness::new(engine.as_ref())
            .with_timing(timing)
            .run(&data, entries, sink.as_mut())
            .context("Benchmark aborted")?;

        log::info!("measured {rows} patterns with {}", engine.name());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: PathBuf) -> BenchArgs {
        BenchArgs {
            input,
            engine: None,
            format: None,
            timing: None,
            patterns: Vec::new(),
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_parse_positional_only() {
        let parsed = BenchArgs::try_parse_from(["rxbench", "input/data.txt"]).unwrap();
        assert_eq!(parsed.input, PathBuf::from("input/data.txt"));
        assert!(parsed.engine.is_none());
        assert!(parsed.patterns.is_empty());
    }

    #[test]
    fn test_parse_rejects_missing_and_extra_arguments() {
        assert!(BenchArgs::try_parse_from(["rxbench"]).is_err());
        assert!(BenchArgs::try_parse_from(["rxbench", "a.txt", "b.txt"]).is_err());
    }

    #[test]
    fn test_parse_options() {
        let parsed = BenchArgs::try_parse_from([
            "rxbench",
            "data.txt",
            "--engine",
            "pikevm",
            "--format",
            "json",
            "--timing",
            "compile-and-match",
            "-p",
            "ip",
            "-p",
            "email",
            "-vv",
        ])
        .unwrap();
        assert_eq!(parsed.engine, Some(EngineChoice::Pikevm));
        assert_eq!(parsed.format, Some(ReportFormat::Json));
        assert_eq!(parsed.timing, Some(TimingScope::CompileAndMatch));
        assert_eq!(parsed.patterns, ["ip", "email"]);
        assert_eq!(parsed.verbose, 2);
    }

    #[test]
    fn test_execute_writes_rows_in_registry_order() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("data.txt");
        fs::write(&input, "HTTP/1.1 200 OK\n[error] x readme.txt\n").unwrap();

        let mut out = Vec::new();
        args(input).execute_to(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let names: Vec<&str> = text
            .lines()
            .skip(2)
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        let expected: Vec<&str> = patterns::PATTERN_REGISTRY.iter().map(|e| e.name).collect();
        assert_eq!(names, expected);
        assert!(text.starts_with("Rust regex (input: 0.00 MB)\n"));
    }

    #[test]
    fn test_execute_pattern_filter() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("data.txt");
        fs::write(&input, "[fatal] [error]\n").unwrap();

        let mut bench = args(input);
        bench.patterns = vec!["literal_alt".to_string()];
        let mut out = Vec::new();
        bench.execute_to(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().nth(2).unwrap().ends_with("     2 matches"));
    }

    #[test]
    fn test_execute_unknown_pattern() {
        let mut bench = args(PathBuf::from("/nonexistent"));
        bench.patterns = vec!["nope".to_string()];
        let err = bench.execute_to(Vec::new()).unwrap_err();
        assert!(err.to_string().contains("unknown pattern 'nope'"));
    }

    #[test]
    fn test_execute_missing_file() {
        let err = args(PathBuf::from("/nonexistent/data.txt"))
            .execute_to(Vec::new())
            .unwrap_err();
        assert!(format!("{err:#}").starts_with("Error reading file: "));
    }

    #[test]
    fn test_execute_uses_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("data.txt");
        let config = temp_dir.path().join("rxbench.toml");
        fs::write(&input, "Server 10.0.0.1 responded\n").unwrap();
        fs::write(
            &config,
            "[benchmark]\nformat = \"json\"\nengine = \"pikevm\"\npatterns = [\"ip\"]\n",
        )
        .unwrap();

        let mut bench = args(input);
        bench.config = Some(config);
        let mut out = Vec::new();
        bench.execute_to(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"engine\":\"Rust regex-automata PikeVM\""));
        assert!(lines[1].contains("\"name\":\"ip\""));
        assert!(lines[1].contains("\"matches\":1"));
    }
}
