//! Progress display for batch solving
//!
//! Small batches get one bar per puzzle showing propagation rounds; large
//! batches collapse into a single bar counting finished puzzles, since a
//! wall of per-file bars stops being readable.

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Coordinates progress display for batch solving
pub struct ProgressManager {
    multi: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
}

fn round_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {pos}/{len} rounds")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
}

fn batch_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Puzzles: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
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
            multi: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
        }
    }

    /// Choose the display mode for the given puzzle count
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let bar = ProgressBar::new(file_count as u64);
            bar.set_style(batch_style());
            self.batch_bar = Some(self.multi.add(bar));
        } else {
            for _ in 0..file_count {
                let bar = ProgressBar::new(0);
                bar.set_style(round_style());
                self.file_bars.push(self.multi.add(bar));
            }
        }
    }

    /// Label a puzzle's bar and set its round budget
    pub fn start_file(&mut self, index: usize, path: &Path, max_rounds: usize) {
        if let Some(bar) = self.file_bars.get(index) {
            bar.set_length(max_rounds as u64);
            bar.set_prefix(
                path.file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string(),
            );
        }
    }

    /// Report the propagation round a puzzle has reached
    pub fn update_round(&mut self, index: usize, round: usize, _elapsed: Duration) {
        if let Some(bar) = self.file_bars.get(index) {
            bar.set_position(round as u64);
        }
    }

    /// Mark a puzzle as finished
    pub fn complete_file(&mut self, index: usize, _elapsed: Duration) {
        if let Some(bar) = self.file_bars.get(index) {
            bar.finish();
        }
        if let Some(ref bar) = self.batch_bar {
            bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref bar) = self.batch_bar {
            bar.finish_with_message("All puzzles processed");
        }
        let _ = self.multi.clear();
    }
}
