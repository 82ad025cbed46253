use super::PackageId;
use serde::Serialize;
use std::collections::BTreeMap;

/// Forward mapping: expanded package → its declared direct dependencies.
pub type ForwardMapping = BTreeMap<PackageId, Vec<PackageId>>;

/// Package → packages that declare it as a dependency.
///
/// Only ever built from a [`ForwardMapping`]; there is no way to edit it
/// directly, so it cannot drift from the edges it was derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReverseIndex(BTreeMap<PackageId, Vec<PackageId>>);

impl ReverseIndex {
    /// Inverts every forward edge exactly once.
    ///
    /// Dependents appear in forward-mapping key order.
    pub fn from_forward(forward: &ForwardMapping) -> Self {
        let mut index: BTreeMap<PackageId, Vec<PackageId>> = BTreeMap::new();

        for (package, dependencies) in forward {
            for dependency in dependencies {
                let dependents = index.entry(dependency.clone()).or_default();
                // All pushes of `package` happen in this iteration, so a repeat
                // can only ever be the last element.
                if dependents.last() != Some(package) {
                    dependents.push(package.clone());
                }
            }
        }

        Self(index)
    }

    /// Packages depending on `package`; empty when nothing does.
    pub fn dependents_of(&self, package: &str) -> &[PackageId] {
        self.0.get(package).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PackageId, &[PackageId])> {
        self.0.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Number of packages with at least one dependent.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
