//! Progress bars for lattice construction and frontier sweeps

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

use crate::io::configuration::PROGRESS_BAR_WIDTH;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "{{prefix:>10}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Drives one progress bar per stage, or nothing when disabled
///
/// Stages run one after another: starting a new stage clears the previous bar.
pub struct ProgressManager {
    enabled: bool,
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a manager, `enabled = false` suppresses all output
    pub const fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }

    /// Whether bars are drawn
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Begin a stage with `length` units of work
    pub fn start(&mut self, label: &str, length: u64) {
        self.finish();
        if !self.enabled {
            return;
        }
        let bar = ProgressBar::new(length);
        bar.set_style(STAGE_STYLE.clone());
        bar.set_prefix(label.to_string());
        self.bar = Some(bar);
    }

    /// Report completed units and a short status message
    pub fn update(&self, position: u64, message: impl Into<String>) {
        if let Some(ref bar) = self.bar {
            bar.set_position(position);
            bar.set_message(message.into());
        }
    }

    /// Clear the current bar, if any
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }

    /// Position of the current bar
    pub fn position(&self) -> Option<u64> {
        self.bar.as_ref().map(ProgressBar::position)
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new(true)
    }
}
