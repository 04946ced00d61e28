//! Deterministic corpus generation for regex engine benchmarks
//!
//! The corpus is a few megabytes of newline-separated text. Most lines are
//! random filler words; every so often, picked by a fixed set of modular
//! congruences on the line index, a line is injected that is guaranteed to
//! match one of the benchmark pattern categories (log levels, HTTP request
//! lines, emails, file names, URIs, IP addresses, fruit literals, version
//! numbers).
//!
//! Output is reproducible byte for byte: the same seed and target size always
//! produce the same corpus, on every platform.
//!
//! # Example
//!
//! ```rust
//! use rxbench_corpus::{CorpusBuilder, Shape, DEFAULT_SEED};
//!
//! let corpus = CorpusBuilder::seeded(DEFAULT_SEED).build(64 * 1024);
//! assert!(corpus.len() >= 64 * 1024);
//! assert!(corpus.as_str().starts_with("HTTP/"));
//! assert!(corpus.shape_count(Shape::LogLevel) > 0);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod sampler;
pub mod shape;
pub mod synthesizer;
pub mod vocabulary;

pub use builder::{Corpus, CorpusBuilder};
pub use config::{GeneratorConfig, MAX_TARGET_MB};
pub use error::{CorpusError, Result};
pub use sampler::{WordSampler, DEFAULT_SEED};
pub use shape::{Shape, ShapeRule, ShapeSchedule, STANDARD_RULES};
pub use synthesizer::LineSynthesizer;
pub use vocabulary::{Vocabularies, Vocabulary};

/// Generate a corpus from `config` with the standard vocabularies and schedule
pub fn generate(config: &GeneratorConfig) -> Result<Corpus> {
    config.validate()?;
    log::info!(
        "generating {} bytes with seed {}",
        config.target_bytes(),
        config.seed
    );
    Ok(CorpusBuilder::seeded(config.seed).build(config.target_bytes()))
}
