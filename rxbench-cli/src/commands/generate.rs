//! Corpus generation command implementation

use crate::config::RxbenchConfig;
use crate::logging;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Parser;
use rxbench_corpus::{Corpus, CorpusBuilder, GeneratorConfig};
use std::io::Write;
use std::path::PathBuf;

/// Write a deterministic synthetic corpus for the regex benchmark
#[derive(Debug, Parser)]
#[command(name = "generate-input", version, about, long_about = None)]
pub struct GenerateArgs {
    /// Seed for the pseudo-random source [default: 42]
    #[arg(short, long, env = "RXBENCH_SEED")]
    pub seed: Option<u64>,

    /// Target size in megabytes [default: 6]
    #[arg(short = 'm', long, value_name = "MB")]
    pub size_mb: Option<f64>,

    /// Output file [default: input/data.txt]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "RXBENCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl GenerateArgs {
    /// Generate and persist the corpus, printing a summary to stdout
    pub fn execute(&self) -> Result<()> {
        let stdout = std::io::stdout();
        self.execute_to(stdout.lock()).map(|_| ())
    }

    /// Generate and persist the corpus, printing a summary to `out`
    pub fn execute_to<W: Write>(&self, mut out: W) -> Result<Corpus> {
        logging::init(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let config = self.resolve()?;
        log::info!(
            "generating {} MB with seed {} into {}",
            config.target_mb,
            config.seed,
            config.output.display()
        );

        let target = config.target_bytes();
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_bytes(target as u64);
        let corpus = CorpusBuilder::seeded(config.seed)
            .build_with_progress(target, |len| progress.update(len as u64));
        progress.finish();

        corpus.persist(&config.output)?;
        writeln!(
            out,
            "Generated {} ({:.2} MB)",
            config.output.display(),
            corpus.size_mb()
        )
        .context("Failed to write summary")?;

        Ok(corpus)
    }

    /// Layer command-line values over the config file
    fn resolve(&self) -> Result<GeneratorConfig> {
        let mut config = RxbenchConfig::load_or_default(self.config.as_deref())?.generator;
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(size_mb) = self.size_mb {
            config.target_mb = size_mb;
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(output: PathBuf) -> GenerateArgs {
        GenerateArgs {
            seed: None,
            size_mb: Some(0.01),
            output: Some(output),
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_parse_without_arguments() {
        let parsed = GenerateArgs::try_parse_from(["generate-input"]).unwrap();
        assert!(parsed.size_mb.is_none());
        assert!(parsed.output.is_none());
        assert!(!parsed.quiet);
    }

    #[test]
    fn test_parse_options() {
        let parsed = GenerateArgs::try_parse_from([
            "generate-input",
            "--seed",
            "7",
            "--size-mb",
            "0.5",
            "--output",
            "corpus.txt",
            "-q",
        ])
        .unwrap();
        assert_eq!(parsed.seed, Some(7));
        assert_eq!(parsed.size_mb, Some(0.5));
        assert_eq!(parsed.output, Some(PathBuf::from("corpus.txt")));
        assert!(parsed.quiet);
    }

    #[test]
    fn test_execute_writes_file_and_summary() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("input").join("data.txt");

        let mut out = Vec::new();
        let corpus = args(output.clone()).execute_to(&mut out).unwrap();

        let written = fs::read(&output).unwrap();
        assert_eq!(written, corpus.as_bytes());
        assert!(written.len() >= 10_486);
        assert!(written.ends_with(b"\n"));

        let summary = String::from_utf8(out).unwrap();
        assert_eq!(
            summary,
            format!("Generated {} (0.01 MB)\n", output.display())
        );
    }

    #[test]
    fn test_seed_flag_changes_output() {
        let temp_dir = TempDir::new().unwrap();
        let first = args(temp_dir.path().join("a.txt"))
            .execute_to(Vec::new())
            .unwrap();

        let mut reseeded = args(temp_dir.path().join("b.txt"));
        reseeded.seed = Some(43);
        let second = reseeded.execute_to(Vec::new()).unwrap();

        assert_ne!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_flags_override_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("rxbench.toml");
        fs::write(&config, "[generator]\nseed = 9\ntarget_mb = 3.0\n").unwrap();

        let mut generate = args(temp_dir.path().join("data.txt"));
        generate.config = Some(config);
        let resolved = generate.resolve().unwrap();

        assert_eq!(resolved.seed, 9);
        assert_eq!(resolved.target_mb, 0.01);
        assert_eq!(resolved.output, temp_dir.path().join("data.txt"));
    }

    #[test]
    fn test_negative_size_rejected() {
        let mut generate = args(PathBuf::from("unused.txt"));
        generate.size_mb = Some(-2.0);
        let err = generate.execute_to(Vec::new()).unwrap_err();
        assert!(err.to_string().contains("target_mb"));
    }

    #[test]
    fn test_oversized_target_rejected_before_building() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("data.txt");
        let mut generate = args(output.clone());
        generate.size_mb = Some(1e300);

        let err = generate.execute_to(Vec::new()).unwrap_err();
        assert!(err.to_string().contains("at most"), "{err}");
        assert!(!output.exists());
    }

    #[test]
    fn test_unwritable_output_fails() {
        let temp_dir = TempDir::new().unwrap();
        // A directory already sits at the output path.
        let err = args(temp_dir.path().to_path_buf())
            .execute_to(Vec::new())
            .unwrap_err();
        assert!(err.to_string().contains("failed to write"));
    }
}
