use crate::graph_analysis::domain::{DependencyGraph, ExpansionState, PackageId, PackageInfo};
use serde::Serialize;

/// Headline numbers for a built graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub expanded_count: usize,
    pub unresolved_count: usize,
}

/// GraphQueryService - read-only lookups over a finished graph
///
/// Queries never fail: a name the graph does not know yields empty lists and
/// [`ExpansionState::Unknown`].
pub struct GraphQueryService<'g> {
    graph: &'g DependencyGraph,
}

impl<'g> GraphQueryService<'g> {
    pub fn new(graph: &'g DependencyGraph) -> Self {
        Self { graph }
    }

    /// Looks up `identifier`, case-insensitively.
    pub fn query(&self, identifier: &str) -> PackageInfo {
        let package = PackageId::canonical(identifier);
        let dependencies = self
            .graph
            .dependencies_of(package.as_str())
            .map(<[PackageId]>::to_vec)
            .unwrap_or_default();
        let dependents = self.graph.dependents_of(package.as_str()).to_vec();
        let state = self.state_of(&package);

        PackageInfo::new(package, dependencies, dependents, state)
    }

    pub fn state_of(&self, package: &PackageId) -> ExpansionState {
        let name = package.as_str();
        if self.graph.is_unresolved(name) {
            ExpansionState::MetadataUnavailable
        } else if self.graph.is_expanded(name) {
            ExpansionState::Expanded
        } else if self.graph.contains(name) {
            ExpansionState::NotExpanded
        } else {
            ExpansionState::Unknown
        }
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            node_count: self.graph.node_count(),
            edge_count: self.graph.edge_count(),
            expanded_count: self.graph.expanded_count(),
            unresolved_count: self.graph.unresolved().len(),
        }
    }

    /// Expanded packages nothing else depends on.
    pub fn roots(&self) -> Vec<&'g PackageId> {
        self.graph
            .forward()
            .keys()
            .filter(|p| self.graph.dependents_of(p.as_str()).is_empty())
            .collect()
    }

    /// Up to `limit` packages with the most dependents, most first; ties by name.
    pub fn most_depended_upon(&self, limit: usize) -> Vec<(&'g PackageId, usize)> {
        let mut counts: Vec<(&PackageId, usize)> = self
            .graph
            .reverse()
            .iter()
            .map(|(p, dependents)| (p, dependents.len()))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        counts.truncate(limit);
        counts
    }
}
