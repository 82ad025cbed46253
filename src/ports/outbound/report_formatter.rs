use crate::graph_analysis::domain::{
    AnalysisMetadata, ComparisonResult, DependencyGraph, PackageInfo,
};
use crate::shared::Result;

/// ReportFormatter port turning analysis results into text for presentation
pub trait ReportFormatter {
    /// Forward mapping, reverse index and summary of a whole graph.
    fn format_graph(&self, graph: &DependencyGraph, metadata: &AnalysisMetadata)
        -> Result<String>;

    /// A single package query result.
    fn format_package(&self, info: &PackageInfo) -> Result<String>;

    /// A comparison result together with its explanation.
    fn format_comparison(&self, result: &ComparisonResult) -> Result<String>;
}
