use crate::graph_analysis::domain::{NodeEdgeSet, PackageId};
use crate::shared::Result;

/// ComparisonSource port supplying an independently built graph (for example
/// from pipdeptree) to compare ours against.
pub trait ComparisonSource {
    /// Builds the reference graph rooted at `package`.
    ///
    /// # Errors
    /// Returns an error when the reference tool is unavailable or its output
    /// cannot be parsed. Unlike metadata lookups this is fatal for a
    /// comparison: there is nothing to compare against.
    fn fetch_graph(&self, package: &PackageId) -> Result<NodeEdgeSet>;

    /// Name used for this side in comparison reports.
    fn label(&self) -> &str {
        "reference"
    }
}

impl<T: ComparisonSource + ?Sized> ComparisonSource for Box<T> {
    fn fetch_graph(&self, package: &PackageId) -> Result<NodeEdgeSet> {
        (**self).fetch_graph(package)
    }

    fn label(&self) -> &str {
        (**self).label()
    }
}
