use super::Edge;
use serde::Serialize;
use std::collections::BTreeSet;

/// Overlap of one kind of element (nodes or edges) between graphs A and B.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetComparison<T: Ord> {
    common: BTreeSet<T>,
    only_in_a: BTreeSet<T>,
    only_in_b: BTreeSet<T>,
    count_a: usize,
    count_b: usize,
}

impl<T: Ord> SetComparison<T> {
    pub fn new(
        common: BTreeSet<T>,
        only_in_a: BTreeSet<T>,
        only_in_b: BTreeSet<T>,
        count_a: usize,
        count_b: usize,
    ) -> Self {
        Self {
            common,
            only_in_a,
            only_in_b,
            count_a,
            count_b,
        }
    }

    pub fn common(&self) -> &BTreeSet<T> {
        &self.common
    }

    pub fn only_in_a(&self) -> &BTreeSet<T> {
        &self.only_in_a
    }

    pub fn only_in_b(&self) -> &BTreeSet<T> {
        &self.only_in_b
    }

    pub fn count_a(&self) -> usize {
        self.count_a
    }

    pub fn count_b(&self) -> usize {
        self.count_b
    }

    pub fn is_identical(&self) -> bool {
        self.only_in_a.is_empty() && self.only_in_b.is_empty()
    }
}

/// Result of comparing two graphs. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    label_a: String,
    label_b: String,
    nodes: SetComparison<String>,
    edges: SetComparison<Edge>,
}

impl ComparisonResult {
    pub fn new(nodes: SetComparison<String>, edges: SetComparison<Edge>) -> Self {
        Self {
            label_a: "A".to_string(),
            label_b: "B".to_string(),
            nodes,
            edges,
        }
    }

    /// Names the two sides for reports, e.g. "ours" and "pipdeptree".
    pub fn with_labels(mut self, label_a: &str, label_b: &str) -> Self {
        self.label_a = label_a.to_string();
        self.label_b = label_b.to_string();
        self
    }

    pub fn label_a(&self) -> &str {
        &self.label_a
    }

    pub fn label_b(&self) -> &str {
        &self.label_b
    }

    pub fn nodes(&self) -> &SetComparison<String> {
        &self.nodes
    }

    pub fn edges(&self) -> &SetComparison<Edge> {
        &self.edges
    }

    pub fn has_differences(&self) -> bool {
        !(self.nodes.is_identical() && self.edges.is_identical())
    }

    /// Advisory reasons for the differences; see [`DivergenceExplanation`].
    ///
    /// [`DivergenceExplanation`]: crate::graph_analysis::policies::DivergenceExplanation
    pub fn explain(&self) -> Vec<String> {
        crate::graph_analysis::policies::DivergenceExplanation::reasons(self)
    }
}
