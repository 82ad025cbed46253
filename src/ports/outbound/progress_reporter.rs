/// ProgressReporter port for user-facing progress during long builds
///
/// Kept separate from `tracing` diagnostics: this is what the person running
/// the tool sees on stderr, regardless of the log filter.
pub trait ProgressReporter {
    /// Reports an informational message.
    fn report(&self, message: &str);

    /// Reports position `current` out of `total`, with an optional label.
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning that does not stop the run.
    fn report_warning(&self, message: &str);

    /// Reports the end of an operation.
    fn report_completion(&self, message: &str);
}
