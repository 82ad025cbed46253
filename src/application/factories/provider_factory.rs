use crate::adapters::outbound::filesystem::RepositoryFileProvider;
use crate::adapters::outbound::network::{CachingMetadataProvider, PyPiMetadataProvider};
use crate::adapters::outbound::process::{PipMetadataProvider, PipdeptreeComparisonSource};
use crate::application::dto::ProviderSelection;
use crate::ports::outbound::{ComparisonSource, InstalledPackageSource, MetadataProvider};
use crate::shared::Result;

/// The adapters a run talks to, chosen together so they agree on the
/// environment they describe.
pub struct Providers {
    pub metadata: Box<dyn MetadataProvider>,
    pub installed: Box<dyn InstalledPackageSource>,
    pub reference: Box<dyn ComparisonSource>,
}

/// Factory wiring metadata, installed-package and comparison adapters
pub struct ProviderFactory;

impl ProviderFactory {
    /// # Errors
    /// The repository file cannot be read, or the HTTP client cannot be built.
    pub fn create(selection: &ProviderSelection) -> Result<Providers> {
        match selection {
            ProviderSelection::RepositoryFile(path) => {
                let repository = RepositoryFileProvider::from_path(path)?;
                tracing::debug!(path = %path.display(), packages = repository.len(), "test mode");
                Ok(Providers {
                    metadata: Box::new(repository.clone()),
                    installed: Box::new(repository.clone()),
                    reference: Box::new(repository),
                })
            }
            ProviderSelection::Pip { python } => Ok(Providers {
                metadata: Box::new(CachingMetadataProvider::new(PipMetadataProvider::new(
                    python.clone(),
                ))),
                installed: Box::new(PipMetadataProvider::new(python.clone())),
                reference: Box::new(PipdeptreeComparisonSource::new()),
            }),
            ProviderSelection::PyPi {
                base_url,
                python,
                pinned,
            } => {
                let mut pypi = PyPiMetadataProvider::new(base_url)?;
                if let Some((package, version)) = pinned {
                    pypi = pypi.with_pinned_version(package.clone(), version);
                }
                Ok(Providers {
                    metadata: Box::new(CachingMetadataProvider::new(pypi)),
                    installed: Box::new(PipMetadataProvider::new(python.clone())),
                    reference: Box::new(PipdeptreeComparisonSource::new()),
                })
            }
        }
    }
}
