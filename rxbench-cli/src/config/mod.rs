//! Configuration module
//!
//! An optional TOML file supplies defaults for both binaries. Command-line
//! flags (and their environment variables) win over the file.
//!
//! ```toml
//! [generator]
//! seed = 42
//! target_mb = 6.0
//! output = "input/data.txt"
//!
//! [benchmark]
//! engine = "regex"
//! format = "text"
//! timing = "match"
//! patterns = []
//! ```

use crate::error::CliError;
use anyhow::{Context, Result};
use rxbench_corpus::GeneratorConfig;
use rxbench_engine::adapters::{self, PikeVmEngine, RegexEngine};
use rxbench_engine::{EngineAdapter, TimingScope};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RxbenchConfig {
    /// Corpus generation settings
    pub generator: GeneratorConfig,

    /// Benchmark run settings
    pub benchmark: BenchmarkConfig,
}

/// Benchmark-related configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchmarkConfig {
    /// Engine to benchmark
    pub engine: EngineChoice,

    /// Report format
    pub format: ReportFormat,

    /// What the clock covers
    pub timing: TimingScope,

    /// Restrict the run to these registry names (empty = all)
    pub patterns: Vec<String>,
}

/// Bundled engines selectable from the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EngineChoice {
    /// The `regex` crate
    #[default]
    Regex,
    /// regex-automata's PikeVM (reference engine)
    Pikevm,
}

impl EngineChoice {
    pub fn name(self) -> &'static str {
        match self {
            EngineChoice::Regex => RegexEngine::NAME,
            EngineChoice::Pikevm => PikeVmEngine::NAME,
        }
    }

    /// Instantiate the adapter
    pub fn adapter(self) -> Result<Box<dyn EngineAdapter>> {
        adapters::by_name(self.name())
            .ok_or_else(|| CliError::UnknownEngine(self.name().to_string()).into())
    }
}

/// Supported report formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Fixed-width table
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl RxbenchConfig {
    /// Read and parse a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content, path)
    }

    /// Parse TOML text; `origin` is used in error messages only
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| CliError::Config {
            path: origin.to_path_buf(),
            reason: e.message().to_string(),
        })?;
        config.generator.validate().map_err(|e| CliError::Config {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(config)
    }

    /// Load `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::info!("loading configuration from {}", path.display());
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }
}
