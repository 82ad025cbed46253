/// Mock implementations for testing
mod mock_comparison_source;
mod mock_installed_packages;
mod mock_metadata_provider;
mod mock_progress_reporter;

#[allow(unused_imports)]
pub use mock_comparison_source::MockComparisonSource;
#[allow(unused_imports)]
pub use mock_installed_packages::MockInstalledPackages;
#[allow(unused_imports)]
pub use mock_metadata_provider::MockMetadataProvider;
#[allow(unused_imports)]
pub use mock_progress_reporter::MockProgressReporter;
