use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Directed edge `(source, target)`: source declares a dependency on target.
pub type Edge = (String, String);

/// Plain node and edge sets of a graph, independent of how it was produced.
///
/// Names are stored exactly as given. Whatever canonicalisation the producer
/// applied is what comparisons will see.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeEdgeSet {
    nodes: BTreeSet<String>,
    edges: BTreeSet<Edge>,
}

impl NodeEdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: &str) {
        self.nodes.insert(node.to_string());
    }

    /// Adds the edge and both of its endpoints.
    pub fn add_edge(&mut self, source: &str, target: &str) {
        self.add_node(source);
        self.add_node(target);
        self.edges.insert((source.to_string(), target.to_string()));
    }

    pub fn nodes(&self) -> &BTreeSet<String> {
        &self.nodes
    }

    pub fn edges(&self) -> &BTreeSet<Edge> {
        &self.edges
    }

    pub fn contains_node(&self, node: &str) -> bool {
        self.nodes.contains(node)
    }

    pub fn contains_edge(&self, source: &str, target: &str) -> bool {
        self.edges
            .contains(&(source.to_string(), target.to_string()))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
