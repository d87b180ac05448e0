//! Stage-based progress reporting for the mosaic pipeline

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display across pipeline stages
///
/// One bar is active at a time; finishing a stage leaves its line in place so
/// the terminal shows one line per completed stage.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    active: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            active: None,
        }
    }

    /// Begin a new stage with `len` units of work
    pub fn start_stage(&mut self, message: &str, len: usize) {
        let bar = ProgressBar::new(len as u64);
        bar.set_style(STAGE_STYLE.clone());
        bar.set_message(message.to_string());
        self.active = Some(self.multi_progress.add(bar));
    }

    /// Advance the current stage by one unit
    pub fn tick(&self) {
        if let Some(bar) = &self.active {
            bar.inc(1);
        }
    }

    /// Complete the current stage, replacing its label with `summary`
    pub fn finish_stage(&mut self, summary: String) {
        if let Some(bar) = self.active.take() {
            bar.set_position(bar.length().unwrap_or(0));
            bar.finish_with_message(summary);
        }
    }
}
