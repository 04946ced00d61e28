//! Deterministic word sampling
//!
//! All randomness in corpus generation flows through a single [`WordSampler`].
//! Draws must happen in the exact order the synthesizer issues them; reordering
//! two draws changes every byte that follows.

use crate::vocabulary::Vocabulary;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed used when none is configured
pub const DEFAULT_SEED: u64 = 42;

/// Uniform sampler over fixed vocabularies, backed by one pseudo-random source
#[derive(Debug, Clone)]
pub struct WordSampler<R = ChaCha8Rng> {
    rng: R,
    common_words: Vocabulary,
}

impl WordSampler<ChaCha8Rng> {
    /// ChaCha8 sampler seeded with `seed`
    pub fn seeded(seed: u64, common_words: Vocabulary) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed), common_words)
    }
}

impl<R: Rng> WordSampler<R> {
    /// Wrap an existing source, e.g. a fixed one in tests
    pub fn with_rng(rng: R, common_words: Vocabulary) -> Self {
        Self { rng, common_words }
    }

    /// One element of `vocab`, chosen uniformly by index
    pub fn sample_one(&mut self, vocab: &Vocabulary) -> &'static str {
        vocab.get(self.index(vocab.len()))
    }

    /// `n` common words joined by single spaces
    pub fn sample_words(&mut self, n: usize) -> String {
        let words = self.common_words;
        let mut out = String::with_capacity(n * 8);
        for i in 0..n {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(self.sample_one(&words));
        }
        out
    }

    /// Uniform integer in `lo..hi`
    ///
    /// # Panics
    /// Panics if `lo >= hi`.
    pub fn sample_count(&mut self, lo: usize, hi: usize) -> usize {
        lo + self.index(hi - lo)
    }

    // Draws over u32 so the stream does not depend on the width of usize.
    fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0 && len <= u32::MAX as usize);
        self.rng.gen_range(0..len as u32) as usize
    }
}
