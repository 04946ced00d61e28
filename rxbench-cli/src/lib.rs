//! rxbench CLI library
//!
//! Backs the two binaries: `generate-input` writes the synthetic corpus and
//! `rxbench` times the pattern registry over it.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod progress;

pub use error::{CliError, CliResult};
