use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
use crate::application::dto::ReportFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for `format`. `colored` only affects text output.
    ///
    /// # Examples
    /// ```
    /// use pkgdep_graph::application::dto::ReportFormat;
    /// use pkgdep_graph::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(ReportFormat::Json, false);
    /// ```
    pub fn create(format: ReportFormat, colored: bool) -> Box<dyn ReportFormatter> {
        match format {
            ReportFormat::Text => Box::new(TextFormatter::new(colored)),
            ReportFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}
