//! Line synthesis
//!
//! A [`LineSynthesizer`] turns a line index into one line of text. The index
//! picks the shape through the [`ShapeSchedule`]; the shape's template is then
//! filled from the vocabularies. Inside each template the draws happen left to
//! right, exactly as the text reads.

use crate::sampler::WordSampler;
use crate::shape::{Shape, ShapeSchedule};
use crate::vocabulary::Vocabularies;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Word-count range of [`Shape::Default`] lines, end exclusive
pub const DEFAULT_WORDS: (usize, usize) = (8, 20);

/// Renders corpus lines from a schedule, a set of vocabularies and a sampler
#[derive(Debug, Clone)]
pub struct LineSynthesizer<R = ChaCha8Rng> {
    sampler: WordSampler<R>,
    vocab: Vocabularies,
    schedule: ShapeSchedule,
}

impl LineSynthesizer<ChaCha8Rng> {
    /// Standard vocabularies and schedule, seeded with `seed`
    pub fn seeded(seed: u64) -> Self {
        let vocab = Vocabularies::standard();
        Self::new(
            WordSampler::seeded(seed, vocab.common_words),
            vocab,
            ShapeSchedule::standard(),
        )
    }
}

impl<R: Rng> LineSynthesizer<R> {
    pub fn new(sampler: WordSampler<R>, vocab: Vocabularies, schedule: ShapeSchedule) -> Self {
        Self {
            sampler,
            vocab,
            schedule,
        }
    }

    /// Replace the schedule, keeping the sampler state
    pub fn with_schedule(mut self, schedule: ShapeSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn schedule(&self) -> &ShapeSchedule {
        &self.schedule
    }

    pub fn vocabularies(&self) -> &Vocabularies {
        &self.vocab
    }

    /// Shape the schedule picks for `index`
    pub fn shape_for(&self, index: u64) -> Shape {
        self.schedule.select(index)
    }

    /// Render the line for `index` (without a line terminator)
    pub fn render(&mut self, index: u64) -> String {
        let shape = self.shape_for(index);
        self.render_shape(shape)
    }

    /// Render a line of the given shape, ignoring the schedule
    pub fn render_shape(&mut self, shape: Shape) -> String {
        let mut line = String::with_capacity(128);
        self.render_into(shape, &mut line);
        line
    }

    /// Append a line of the given shape to `out`
    pub fn render_into(&mut self, shape: Shape, out: &mut String) {
        let v = self.vocab;
        let s = &mut self.sampler;

        match shape {
            Shape::HttpStatus => {
                let version = s.sample_one(&v.http_versions);
                let words = s.sample_words(5);
                push_all(out, &[version, " 200 OK ", &words]);
            }
            Shape::LogLevel => {
                let level = s.sample_one(&v.log_levels);
                let words = s.sample_words(8);
                let file = s.sample_one(&v.filenames);
                push_all(out, &["[", level, "] ", &words, " ", file]);
            }
            Shape::Email => {
                let email = s.sample_one(&v.emails);
                let words = s.sample_words(6);
                push_all(out, &["Contact: ", email, " for ", &words]);
            }
            Shape::Filename => {
                let file = s.sample_one(&v.filenames);
                let words = s.sample_words(7);
                push_all(out, &["File: ", file, " - ", &words]);
            }
            Shape::Uri => {
                let uri = s.sample_one(&v.uris);
                let words = s.sample_words(5);
                push_all(out, &["Link: ", uri, " ", &words]);
            }
            Shape::IpAddress => {
                let ip = s.sample_one(&v.ip_addresses);
                let words = s.sample_words(4);
                push_all(out, &["Server ", ip, " responded with ", &words]);
            }
            Shape::Fruit => {
                let fruit = s.sample_one(&v.fruits);
                let words = s.sample_words(5);
                push_all(out, &["Fresh ", fruit, " available at the market ", &words]);
            }
            Shape::Version => {
                let version = s.sample_one(&v.versions);
                let words = s.sample_words(6);
                push_all(out, &["Updated to version ", version, " with ", &words]);
            }
            Shape::Default => {
                let count = s.sample_count(DEFAULT_WORDS.0, DEFAULT_WORDS.1);
                out.push_str(&s.sample_words(count));
            }
        }
    }

    /// Upper bound on the byte length of any line this synthesizer renders
    pub fn max_line_len(&self) -> usize {
        let v = &self.vocab;
        let word = v.longest_common_word();
        let run = |n: usize| n * word + n.saturating_sub(1);
        let longest = |vocab: &crate::vocabulary::Vocabulary| {
            vocab.entries().iter().map(|e| e.len()).max().unwrap_or(0)
        };

        [
            longest(&v.http_versions) + " 200 OK ".len() + run(5),
            "[] ".len() + longest(&v.log_levels) + run(8) + 1 + longest(&v.filenames),
            "Contact:  for ".len() + longest(&v.emails) + run(6),
            "File:  - ".len() + longest(&v.filenames) + run(7),
            "Link:  ".len() + longest(&v.uris) + run(5),
            "Server  responded with ".len() + longest(&v.ip_addresses) + run(4),
            "Fresh  available at the market ".len() + longest(&v.fruits) + run(5),
            "Updated to version  with ".len() + longest(&v.versions) + run(6),
            run(DEFAULT_WORDS.1 - 1),
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}

fn push_all(out: &mut String, parts: &[&str]) {
    for part in parts {
        out.push_str(part);
    }
}
