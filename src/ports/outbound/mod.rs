/// Outbound ports (driven ports) - infrastructure interfaces
///
/// The graph core and the use cases talk to package managers, registries,
/// the console and the file system only through these traits.
pub mod comparison_source;
pub mod installed_packages;
pub mod metadata_provider;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use comparison_source::ComparisonSource;
pub use installed_packages::InstalledPackageSource;
pub use metadata_provider::MetadataProvider;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
