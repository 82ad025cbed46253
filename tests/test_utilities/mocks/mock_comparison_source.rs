use pkgdep_graph::prelude::*;

/// Mock ComparisonSource serving a prepared reference graph
#[derive(Default)]
pub struct MockComparisonSource {
    graph: NodeEdgeSet,
}

#[allow(dead_code)]
impl MockComparisonSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_edge(mut self, source: &str, target: &str) -> Self {
        self.graph.add_edge(source, target);
        self
    }

    pub fn with_node(mut self, node: &str) -> Self {
        self.graph.add_node(node);
        self
    }
}

impl ComparisonSource for MockComparisonSource {
    fn fetch_graph(&self, _package: &PackageId) -> Result<NodeEdgeSet> {
        Ok(self.graph.clone())
    }

    fn label(&self) -> &str {
        "mock-tree"
    }
}
