//! Corpus file reading

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads the benchmark input in one go
pub struct FileReader;

impl FileReader {
    /// Read a whole file as raw bytes
    pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
        let content = fs::read(path)
            .with_context(|| format!("Error reading file: {}", path.display()))?;
        log::debug!("read {} bytes from {}", content.len(), path.display());
        Ok(content)
    }
}
