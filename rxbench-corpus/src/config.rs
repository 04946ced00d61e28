//! Generator configuration

use crate::error::{CorpusError, Result};
use crate::sampler::DEFAULT_SEED;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default corpus size in megabytes
pub const DEFAULT_TARGET_MB: f64 = 6.0;

/// Largest accepted corpus size; the whole corpus is held in memory
pub const MAX_TARGET_MB: f64 = 1024.0;

/// Default location of the generated corpus, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "input/data.txt";

/// Settings for one corpus generation run
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Seed for the pseudo-random source
    pub seed: u64,
    /// Target size in binary megabytes
    pub target_mb: f64,
    /// Output file path
    pub output: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            target_mb: DEFAULT_TARGET_MB,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl GeneratorConfig {
    /// Target size in bytes
    pub fn target_bytes(&self) -> usize {
        (self.target_mb * 1024.0 * 1024.0).round() as usize
    }

    /// Reject sizes that are negative, not finite, or above [`MAX_TARGET_MB`]
    pub fn validate(&self) -> Result<()> {
        if !self.target_mb.is_finite() || self.target_mb < 0.0 {
            return Err(CorpusError::InvalidConfig(format!(
                "target_mb must be a non-negative number, got {}",
                self.target_mb
            )));
        }
        if self.target_mb > MAX_TARGET_MB {
            return Err(CorpusError::InvalidConfig(format!(
                "target_mb must be at most {MAX_TARGET_MB}, got {}",
                self.target_mb
            )));
        }
        Ok(())
    }
}
