//! Progress reporting for scans
//!
//! The engine reports coarse milestones through a ScanProgress sink; the sink
//! is purely observational and never affects scan results. The CLI adapter
//! renders the milestones with indicatif.

use indicatif::{ProgressBar, ProgressStyle};

/// Observer for scan milestones
///
/// Receives a human-readable message and an overall percentage (0-100).
pub trait ScanProgress {
    /// Report a milestone
    fn report(&mut self, message: &str, percent: u8);
}

/// Sink that discards all progress reports
pub struct NoProgress;

impl ScanProgress for NoProgress {
    fn report(&mut self, _message: &str, _percent: u8) {}
}

/// Terminal progress bar over scan milestones
pub struct CliProgress {
    /// Whether display is enabled (disabled in quiet/JSON mode)
    enabled: bool,
    bar: Option<ProgressBar>,
}

impl CliProgress {
    /// Create a new progress reporter
    pub fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }

    /// Create a disabled progress reporter
    pub fn disabled() -> Self {
        Self::new(false)
    }

    fn ensure_bar(&mut self) -> &ProgressBar {
        if self.bar.is_none() {
            let bar = ProgressBar::new(100);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.cyan} {msg} [{bar:30.cyan/blue}] {pos}%")
                    .expect("Invalid template")
                    .progress_chars("█▓▒░"),
            );
            self.bar = Some(bar);
        }
        self.bar.as_ref().unwrap()
    }

    /// Clear the bar from the terminal
    pub fn finish_and_clear(&mut self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
        self.bar = None;
    }
}

impl ScanProgress for CliProgress {
    fn report(&mut self, message: &str, percent: u8) {
        if !self.enabled {
            return;
        }
        let bar = self.ensure_bar();
        bar.set_position(percent.min(100) as u64);
        bar.set_message(message.to_string());
    }
}

impl Default for CliProgress {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Recording sink used across the test suite
    pub struct RecordingProgress {
        pub reports: Vec<(String, u8)>,
    }

    impl ScanProgress for RecordingProgress {
        fn report(&mut self, message: &str, percent: u8) {
            self.reports.push((message.to_string(), percent));
        }
    }

    #[test]
    fn test_no_progress_is_silent() {
        let mut progress = NoProgress;
        progress.report("anything", 50);
    }

    #[test]
    fn test_cli_progress_disabled() {
        let mut progress = CliProgress::disabled();
        progress.report("Checking dio...", 42);
        assert!(progress.bar.is_none());
        progress.finish_and_clear();
    }

    #[test]
    fn test_cli_progress_enabled() {
        let mut progress = CliProgress::new(true);
        progress.report("Parsing manifest...", 0);
        progress.report("Checking dio...", 50);
        assert!(progress.bar.is_some());
        progress.finish_and_clear();
        assert!(progress.bar.is_none());
    }

    #[test]
    fn test_cli_progress_caps_percent() {
        let mut progress = CliProgress::new(true);
        progress.report("done", 200);
        assert_eq!(progress.bar.as_ref().unwrap().position(), 100);
        progress.finish_and_clear();
    }

    #[test]
    fn test_recording_progress() {
        let mut progress = RecordingProgress { reports: vec![] };
        progress.report("start", 0);
        progress.report("end", 100);
        assert_eq!(progress.reports.len(), 2);
        assert_eq!(progress.reports[0], ("start".to_string(), 0));
    }
}
