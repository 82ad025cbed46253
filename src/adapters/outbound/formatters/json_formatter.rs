use crate::graph_analysis::domain::{
    AnalysisMetadata, ComparisonResult, DependencyGraph, PackageInfo,
};
use crate::graph_analysis::services::{GraphQueryService, GraphSummary};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Serialize)]
struct GraphReport<'a> {
    metadata: &'a AnalysisMetadata,
    summary: GraphSummary,
    #[serde(flatten)]
    graph: &'a DependencyGraph,
}

#[derive(Serialize)]
struct ComparisonReport<'a> {
    #[serde(flatten)]
    result: &'a ComparisonResult,
    has_differences: bool,
    explanation: Vec<String>,
}

/// JsonFormatter adapter emitting pretty-printed JSON for scripting
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_graph(&self, graph: &DependencyGraph, metadata: &AnalysisMetadata) -> Result<String> {
        let report = GraphReport {
            metadata,
            summary: GraphQueryService::new(graph).summary(),
            graph,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }

    fn format_package(&self, info: &PackageInfo) -> Result<String> {
        Ok(serde_json::to_string_pretty(info)?)
    }

    fn format_comparison(&self, result: &ComparisonResult) -> Result<String> {
        let report = ComparisonReport {
            result,
            has_differences: result.has_differences(),
            explanation: result.explain(),
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}
