use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes to stderr so graphs and reports on stdout stay clean. Batch
/// traversal drives an indicatif progress bar; warnings are printed in
/// yellow above it.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
            quiet: false,
        }
    }

    /// Only warnings are printed; informational lines and the progress bar
    /// are suppressed.
    pub fn quiet() -> Self {
        Self {
            progress_bar: RefCell::new(None),
            quiet: true,
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            pb.clone()
        } else {
            let pb = ProgressBar::new(total as u64);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}")
            {
                pb.set_style(style.progress_chars("=>-"));
            }
            *pb_option = Some(pb.clone());
            pb
        }
    }

    fn finish_progress_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        if self.quiet {
            return;
        }
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        let line = format!("⚠️  {}", message);
        match self.progress_bar.borrow().as_ref() {
            Some(pb) => pb.suspend(|| eprintln!("{}", line.yellow())),
            None => eprintln!("{}", line.yellow()),
        }
    }

    fn report_completion(&self, message: &str) {
        self.finish_progress_bar();
        if !self.quiet {
            eprintln!("{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_creation() {
        let reporter = StderrProgressReporter::new();
        reporter.report("Parsing Sources index...");
        reporter.report_progress(5, 10, Some("libfoo1"));
        reporter.report_error("Unknown package: ghost");
        reporter.report_completion("Done");
        assert!(reporter.progress_bar.borrow().is_none());
    }

    #[test]
    fn test_quiet_reporter_never_creates_a_bar() {
        let reporter = StderrProgressReporter::quiet();
        reporter.report_progress(1, 2, None);
        assert!(reporter.progress_bar.borrow().is_none());
        reporter.report_error("still printed");
    }

    #[test]
    fn test_progress_reporter_default() {
        let reporter = StderrProgressReporter::default();
        assert!(!reporter.quiet);
    }
}
