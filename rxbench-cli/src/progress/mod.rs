//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress bar for corpus generation, measured in bytes
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize the bar for a corpus of `total_bytes`
    pub fn init_bytes(&mut self, total_bytes: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total_bytes);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {bytes}/{total_bytes} {msg}")
        {
            pb.set_style(style.progress_chars("##-"));
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Move the bar to `bytes`, clamped to the bar length
    pub fn update(&self, bytes: u64) {
        if let Some(pb) = &self.progress_bar {
            let len = pb.length().unwrap_or(bytes);
            pb.set_position(bytes.min(len));
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }

    /// Whether a bar is being drawn
    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_draws_nothing() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_bytes(1024);
        assert!(!reporter.is_active());
        reporter.update(512);
        reporter.finish();
    }

    #[test]
    fn test_update_clamps_to_length() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_bytes(100);
        reporter.update(250);
        let pb = reporter.progress_bar.as_ref().unwrap();
        assert_eq!(pb.position(), 100);
        reporter.finish();
    }
}
