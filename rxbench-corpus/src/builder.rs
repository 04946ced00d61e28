//! Corpus assembly and persistence

use crate::error::{CorpusError, Result};
use crate::shape::Shape;
use crate::synthesizer::LineSynthesizer;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::path::Path;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Minimum number of bytes between two progress callbacks
pub const PROGRESS_STEP: usize = 64 * 1024;

/// A generated corpus: newline-terminated UTF-8 lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    text: String,
    line_count: u64,
    shape_counts: [u64; Shape::ALL.len()],
}

impl Corpus {
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of lines, equal to the last line index used
    pub fn line_count(&self) -> u64 {
        self.line_count
    }

    /// How many lines were rendered with `shape`
    pub fn shape_count(&self, shape: Shape) -> u64 {
        self.shape_counts[shape.ordinal()]
    }

    /// Size in binary megabytes
    pub fn size_mb(&self) -> f64 {
        self.text.len() as f64 / BYTES_PER_MB
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.text.into_bytes()
    }

    /// Write the corpus to `path` in a single write, creating parent
    /// directories first.
    pub fn persist(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| CorpusError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(path, self.as_bytes()).map_err(|source| CorpusError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!(
            "wrote {} bytes ({} lines) to {}",
            self.len(),
            self.line_count,
            path.display()
        );
        Ok(())
    }
}

/// Drives a [`LineSynthesizer`] until the corpus reaches a target size
#[derive(Debug)]
pub struct CorpusBuilder<R = ChaCha8Rng> {
    synthesizer: LineSynthesizer<R>,
}

impl CorpusBuilder<ChaCha8Rng> {
    /// Builder over the standard vocabularies and schedule
    pub fn seeded(seed: u64) -> Self {
        Self::new(LineSynthesizer::seeded(seed))
    }
}

impl<R: Rng> CorpusBuilder<R> {
    pub fn new(synthesizer: LineSynthesizer<R>) -> Self {
        Self { synthesizer }
    }

    /// Generate lines until the corpus holds at least `target_bytes` bytes.
    ///
    /// The size check runs after each line, so the result overshoots the
    /// target by less than one line.
    pub fn build(self, target_bytes: usize) -> Corpus {
        self.build_with_progress(target_bytes, |_| {})
    }

    /// Like [`CorpusBuilder::build`], reporting the current length roughly
    /// every [`PROGRESS_STEP`] bytes and once at the end.
    pub fn build_with_progress<F>(mut self, target_bytes: usize, mut on_progress: F) -> Corpus
    where
        F: FnMut(usize),
    {
        let capacity = target_bytes.saturating_add(self.synthesizer.max_line_len() + 1);
        let mut text = String::new();
        if text.try_reserve(capacity).is_err() {
            log::warn!("could not reserve {capacity} bytes up front, growing on demand");
        }
        for vocab in self.synthesizer.vocabularies().all() {
            log::trace!("vocabulary {}: {} entries", vocab.name(), vocab.len());
        }
        let mut shape_counts = [0u64; Shape::ALL.len()];
        let mut index: u64 = 0;
        let mut next_report = PROGRESS_STEP;

        while text.len() < target_bytes {
            index += 1;
            let shape = self.synthesizer.shape_for(index);
            self.synthesizer.render_into(shape, &mut text);
            text.push('\n');
            shape_counts[shape.ordinal()] += 1;

            if text.len() >= next_report {
                on_progress(text.len());
                next_report = text.len() + PROGRESS_STEP;
            }
        }
        on_progress(text.len());

        log::debug!(
            "generated {index} lines, {} bytes (target {target_bytes})",
            text.len()
        );
        for shape in Shape::ALL {
            log::trace!("  {shape}: {}", shape_counts[shape.ordinal()]);
        }

        Corpus {
            text,
            line_count: index,
            shape_counts,
        }
    }
}
