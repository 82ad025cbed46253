use crate::graph_analysis::domain::{ComparisonResult, NodeEdgeSet, SetComparison};
use std::collections::BTreeSet;

/// GraphComparator - set differences between two independently built graphs
///
/// The inputs are opaque node/edge sets; nothing is assumed about who built
/// them or how deep they go. Names are compared by exact string equality and
/// are not re-normalised here. If the two producers canonicalise differently
/// (one lower-cases, the other keeps `Django`), the same package shows up as
/// unique on both sides and the counts are inflated accordingly.
pub struct GraphComparator;

impl GraphComparator {
    pub fn compare(a: &NodeEdgeSet, b: &NodeEdgeSet) -> ComparisonResult {
        let nodes = Self::diff(a.nodes(), b.nodes());
        let edges = Self::diff(a.edges(), b.edges());
        ComparisonResult::new(nodes, edges)
    }

    fn diff<T: Ord + Clone>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> SetComparison<T> {
        SetComparison::new(
            a.intersection(b).cloned().collect(),
            a.difference(b).cloned().collect(),
            b.difference(a).cloned().collect(),
            a.len(),
            b.len(),
        )
    }
}
