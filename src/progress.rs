//! Terminal feedback while a manifest is read and its packages are checked
//!
//! Bars are always created; when feedback is off they draw to a hidden
//! target so positions are still tracked.

use crate::domain::{LatestRelease, Package};
use crate::manifest::ManifestSource;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const READING_TEMPLATE: &str = "{spinner:.cyan} Reading {msg}";
const CHECKING_TEMPLATE: &str = "{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}";

/// Progress of reading a manifest or checking its packages
pub struct CheckProgress {
    bar: ProgressBar,
}

fn draw_target(enabled: bool) -> ProgressDrawTarget {
    if enabled {
        ProgressDrawTarget::stderr()
    } else {
        ProgressDrawTarget::hidden()
    }
}

impl CheckProgress {
    /// Spinner while the manifest is read; never drawn for stdin
    pub fn reading(source: &ManifestSource, enabled: bool) -> Self {
        let enabled = enabled && *source != ManifestSource::Stdin;
        let bar = ProgressBar::with_draw_target(None, draw_target(enabled));
        bar.set_style(
            ProgressStyle::with_template(READING_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        bar.set_message(source.to_string());
        if enabled {
            bar.enable_steady_tick(Duration::from_millis(80));
        }
        Self { bar }
    }

    /// Bar with one step per manifest entry
    pub fn lookups(packages: &[Package], enabled: bool) -> Self {
        let bar =
            ProgressBar::with_draw_target(Some(packages.len() as u64), draw_target(enabled));
        bar.set_style(
            ProgressStyle::with_template(CHECKING_TEMPLATE)
                .map(|style| style.progress_chars("█▓▒░"))
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_message("checking packages");
        if enabled {
            bar.enable_steady_tick(Duration::from_millis(100));
        }
        Self { bar }
    }

    /// Advance past every entry that declares `name` and show how its lookup went
    pub fn record(&self, name: &str, entries: u64, outcome: &Result<LatestRelease, String>) {
        self.bar.set_message(outcome_message(name, outcome));
        self.bar.inc(entries);
    }

    /// Entries accounted for so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}

fn outcome_message(name: &str, outcome: &Result<LatestRelease, String>) -> String {
    match outcome {
        Ok(latest) => format!("{} {}", name, latest.raw),
        Err(_) => format!("{} lookup failed", name),
    }
}
