//! Spinner showing the running solution count during quiet searches

use crate::board::Board;
use crate::io::configuration::PROGRESS_TICK_MS;
use crate::io::error::Result;
use crate::search::sink::SolutionSink;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg} solutions: {pos}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Counts tilings while animating a spinner on stderr
///
/// Used when diagrams are suppressed, so long enumerations still show that
/// the search is alive and how far it has got.
pub struct SearchProgress {
    bar: ProgressBar,
    count: u64,
}

impl SearchProgress {
    /// Create a visible spinner labelled with the board being searched
    pub fn new(label: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_message(label.to_string());
        bar.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
        Self { bar, count: 0 }
    }

    /// Create a counter that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            count: 0,
        }
    }

    /// Tilings counted so far
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Stop the spinner and clear it from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl SolutionSink for SearchProgress {
    fn on_solution(&mut self, index: u64, _board: &Board) -> Result<()> {
        self.count = index;
        self.bar.set_position(index);
        Ok(())
    }
}
