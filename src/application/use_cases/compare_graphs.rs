use crate::graph_analysis::domain::{ComparisonResult, DependencyGraph, PackageId};
use crate::graph_analysis::services::GraphComparator;
use crate::ports::outbound::{ComparisonSource, ProgressReporter};
use crate::shared::Result;

/// Label used for our own graph in comparison reports.
const OURS: &str = "ours";

/// CompareGraphsUseCase - compares a built graph with an independent reference
///
/// `ours` is expected to be the graph built from `package` as its only seed.
///
/// # Type Parameters
/// * `CS` - ComparisonSource implementation (for example pipdeptree)
/// * `PR` - ProgressReporter implementation
pub struct CompareGraphsUseCase<CS, PR> {
    comparison_source: CS,
    progress_reporter: PR,
}

impl<CS, PR> CompareGraphsUseCase<CS, PR>
where
    CS: ComparisonSource,
    PR: ProgressReporter,
{
    pub fn new(comparison_source: CS, progress_reporter: PR) -> Self {
        Self {
            comparison_source,
            progress_reporter,
        }
    }

    /// # Errors
    /// Fails when the reference graph cannot be obtained.
    pub fn execute(&self, ours: &DependencyGraph, package: &PackageId) -> Result<ComparisonResult> {
        let label = self.comparison_source.label().to_string();
        self.progress_reporter
            .report(&format!("🔎 Fetching reference graph for '{}' from {}...", package, label));

        let reference = self.comparison_source.fetch_graph(package)?;
        if reference.is_empty() {
            self.progress_reporter.report_warning(&format!(
                "{} returned no data for '{}'; every package will count as unique to {}.",
                label, package, OURS
            ));
        }

        let result = GraphComparator::compare(&ours.to_node_edge_set(), &reference)
            .with_labels(OURS, &label);

        tracing::info!(
            package = %package,
            common_nodes = result.nodes().common().len(),
            differences = result.has_differences(),
            "graphs compared"
        );
        self.progress_reporter.report_completion(if result.has_differences() {
            "⚠️  Graphs differ"
        } else {
            "✅ Graphs are identical"
        });

        Ok(result)
    }
}
