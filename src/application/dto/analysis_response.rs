use crate::graph_analysis::domain::{AnalysisMetadata, DependencyGraph, PackageId};

/// AnalysisResponse - the built graph and how it was produced
#[derive(Debug, Clone)]
pub struct AnalysisResponse {
    pub graph: DependencyGraph,
    pub metadata: AnalysisMetadata,
    /// Seeds actually handed to the builder, after resolution and de-duplication
    pub seeds: Vec<PackageId>,
}

impl AnalysisResponse {
    pub fn new(graph: DependencyGraph, metadata: AnalysisMetadata, seeds: Vec<PackageId>) -> Self {
        Self {
            graph,
            metadata,
            seeds,
        }
    }
}
