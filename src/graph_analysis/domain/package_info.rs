use super::PackageId;
use serde::Serialize;

/// What the last build knows about a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpansionState {
    /// Metadata was fetched and the dependency list recorded.
    Expanded,
    /// Expanded, but metadata could not be fetched; recorded with zero dependencies.
    MetadataUnavailable,
    /// Referenced as a dependency but never expanded (depth limit).
    NotExpanded,
    /// Not part of the graph at all.
    Unknown,
}

impl std::fmt::Display for ExpansionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            ExpansionState::Expanded => "expanded",
            ExpansionState::MetadataUnavailable => "metadata unavailable",
            ExpansionState::NotExpanded => "not expanded",
            ExpansionState::Unknown => "unknown",
        };
        f.write_str(text)
    }
}

/// Query result for a single package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageInfo {
    pub package: PackageId,
    pub direct_dependencies: Vec<PackageId>,
    pub dependents: Vec<PackageId>,
    pub dependency_count: usize,
    pub dependent_count: usize,
    pub state: ExpansionState,
}

impl PackageInfo {
    pub fn new(
        package: PackageId,
        direct_dependencies: Vec<PackageId>,
        dependents: Vec<PackageId>,
        state: ExpansionState,
    ) -> Self {
        Self {
            package,
            dependency_count: direct_dependencies.len(),
            dependent_count: dependents.len(),
            direct_dependencies,
            dependents,
            state,
        }
    }
}
