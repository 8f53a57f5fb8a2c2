use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use onto_core::{BatchState, TermTask};
use onto_resolve::BatchSummary;

use crate::ui;

fn enabled() -> bool {
    ui::prefs().progress
}

fn bar_template() -> &'static str {
    match ui::prefs().term_width {
        Some(cols) if cols >= 110 => "{bar:40.cyan/blue} {pos}/{len} {msg}",
        Some(cols) if cols >= 80 => "{wide_bar:.cyan/blue} {pos}/{len} {msg}",
        _ => "{wide_bar:.cyan/blue} {percent}% {msg}",
    }
}

/// Spinner shown while a single request is in flight. Cleared on drop.
pub struct Activity {
    spinner: Option<ProgressBar>,
}

impl Activity {
    #[must_use]
    pub fn start(message: String) -> Self {
        if !enabled() {
            return Self { spinner: None };
        }

        let spinner = ProgressBar::new_spinner();
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message);
        Self {
            spinner: Some(spinner),
        }
    }
}

impl Drop for Activity {
    fn drop(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

/// One tick per finished term of a batch run.
pub struct TermProgress {
    bar: Option<ProgressBar>,
}

impl TermProgress {
    #[must_use]
    pub fn new(total: usize) -> Self {
        if !enabled() {
            return Self { bar: None };
        }

        let bar = ProgressBar::new(u64::try_from(total).unwrap_or(u64::MAX));
        bar.set_style(
            ProgressStyle::with_template(bar_template())
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_message("Resolving terms");
        Self { bar: Some(bar) }
    }

    pub fn term(&self, task: &TermTask) {
        if let Some(bar) = &self.bar {
            bar.set_message(format!("{}/{} {}", task.index, task.total, task.term));
        }
    }

    pub fn advance(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    /// Leave the bar on screen with the summary; a cancelled run is abandoned
    /// so the bar stops short of full.
    pub fn finish(&self, summary: &BatchSummary) {
        let Some(bar) = &self.bar else {
            return;
        };
        match summary.state {
            BatchState::Cancelled => bar.abandon_with_message(summary.message()),
            _ => bar.finish_with_message(summary.message()),
        }
    }
}
