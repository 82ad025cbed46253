use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

const BAR_TEMPLATE: &str =
    "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} seeds ({percent}%) - {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Progress goes to stderr so the report on stdout can be piped. One bar is
/// created lazily on the first `report_progress` call and cleared on
/// completion.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut slot = self.progress_bar.borrow_mut();
        if let Some(pb) = slot.as_ref() {
            return pb.clone();
        }

        let pb = ProgressBar::new(total as u64);
        // A template error only costs us the custom look.
        if let Ok(style) = ProgressStyle::with_template(BAR_TEMPLATE) {
            pb.set_style(style.progress_chars("=>-"));
        }
        *slot = Some(pb.clone());
        pb
    }

    fn clear_progress_bar(&self) {
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
        match self.progress_bar.borrow().as_ref() {
            Some(pb) => pb.println(message),
            None => eprintln!("{}", message),
        }
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let pb = self.get_or_create_progress_bar(total);
        pb.set_length(total as u64);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_warning(&self, message: &str) {
        let line = format!("⚠️  Warning: {}", message);
        match self.progress_bar.borrow().as_ref() {
            Some(pb) => pb.println(line),
            None => eprintln!("{}", line),
        }
    }

    fn report_completion(&self, message: &str) {
        self.clear_progress_bar();
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_lifecycle() {
        let reporter = StderrProgressReporter::new();
        reporter.report("Resolving dependencies");
        reporter.report_progress(1, 3, Some("flask"));
        reporter.report_warning("metadata unavailable for broken");
        reporter.report_progress(3, 3, None);
        reporter.report_completion("done");
        assert!(reporter.progress_bar.borrow().is_none());
    }

    #[test]
    fn test_progress_bar_is_reused() {
        let reporter = StderrProgressReporter::default();
        reporter.report_progress(1, 2, None);
        reporter.report_progress(2, 2, None);
        let bar = reporter.progress_bar.borrow();
        assert_eq!(bar.as_ref().map(|pb| pb.position()), Some(2));
    }
}
