use crate::graph_analysis::domain::PackageId;
use std::path::PathBuf;

/// Which metadata backend a run uses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderSelection {
    /// Synthetic repository from a TOML file (test mode)
    RepositoryFile(PathBuf),
    /// `python -m pip` against the local environment
    Pip { python: String },
    /// PyPI JSON API; `python` still lists installed packages
    PyPi {
        base_url: String,
        python: String,
        pinned: Option<(PackageId, String)>,
    },
}
