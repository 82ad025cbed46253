use super::{ForwardMapping, NodeEdgeSet, PackageId, ReverseIndex};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// DependencyGraph aggregate produced by one build pass.
///
/// Keys of the forward mapping are exactly the packages that were expanded.
/// A package that only shows up as somebody's dependency (for example because
/// the depth limit was reached) has no key of its own, so
/// [`dependencies_of`](Self::dependencies_of) returns `None` for it rather
/// than an empty slice.
///
/// The graph is immutable once constructed; the reverse index is computed in
/// the constructor from the forward mapping it is given.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DependencyGraph {
    forward: ForwardMapping,
    reverse: ReverseIndex,
    unresolved: BTreeSet<PackageId>,
}

impl DependencyGraph {
    /// `unresolved` lists expanded packages whose metadata could not be
    /// fetched and which were recorded with zero dependencies.
    ///
    /// Repeated entries in a dependency list are dropped, keeping the first
    /// occurrence, so each edge exists once.
    pub fn new(mut forward: ForwardMapping, unresolved: BTreeSet<PackageId>) -> Self {
        for dependencies in forward.values_mut() {
            let mut seen = HashSet::new();
            dependencies.retain(|dependency| seen.insert(dependency.clone()));
        }
        let reverse = ReverseIndex::from_forward(&forward);
        Self {
            forward,
            reverse,
            unresolved,
        }
    }

    pub fn from_forward(forward: ForwardMapping) -> Self {
        Self::new(forward, BTreeSet::new())
    }

    pub fn forward(&self) -> &ForwardMapping {
        &self.forward
    }

    pub fn reverse(&self) -> &ReverseIndex {
        &self.reverse
    }

    pub fn unresolved(&self) -> &BTreeSet<PackageId> {
        &self.unresolved
    }

    /// `None` means "never expanded", `Some(&[])` means "expanded, no dependencies".
    pub fn dependencies_of(&self, package: &str) -> Option<&[PackageId]> {
        self.forward.get(package).map(Vec::as_slice)
    }

    pub fn dependents_of(&self, package: &str) -> &[PackageId] {
        self.reverse.dependents_of(package)
    }

    pub fn is_expanded(&self, package: &str) -> bool {
        self.forward.contains_key(package)
    }

    pub fn is_unresolved(&self, package: &str) -> bool {
        self.unresolved.contains(package)
    }

    /// True for expanded packages and for packages only referenced as a dependency.
    pub fn contains(&self, package: &str) -> bool {
        self.is_expanded(package) || !self.dependents_of(package).is_empty()
    }

    /// Every node: expanded packages plus anything they reference.
    pub fn nodes(&self) -> BTreeSet<&PackageId> {
        self.forward
            .iter()
            .flat_map(|(package, deps)| std::iter::once(package).chain(deps.iter()))
            .collect()
    }

    /// Directed edges `(package, dependency)` in forward-mapping order.
    pub fn edges(&self) -> impl Iterator<Item = (&PackageId, &PackageId)> {
        self.forward
            .iter()
            .flat_map(|(package, deps)| deps.iter().map(move |dep| (package, dep)))
    }

    pub fn node_count(&self) -> usize {
        self.nodes().len()
    }

    pub fn edge_count(&self) -> usize {
        self.forward.values().map(Vec::len).sum()
    }

    pub fn expanded_count(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Opaque node/edge view consumed by the comparator.
    pub fn to_node_edge_set(&self) -> NodeEdgeSet {
        let mut set = NodeEdgeSet::new();
        for package in self.forward.keys() {
            set.add_node(package.as_str());
        }
        for (package, dependency) in self.edges() {
            set.add_edge(package.as_str(), dependency.as_str());
        }
        set
    }
}
