pub mod analysis_metadata;
pub mod comparison;
pub mod dependency_graph;
pub mod node_edge_set;
pub mod package_id;
pub mod package_info;
pub mod reverse_index;

pub use analysis_metadata::AnalysisMetadata;
pub use comparison::{ComparisonResult, SetComparison};
pub use dependency_graph::DependencyGraph;
pub use node_edge_set::{Edge, NodeEdgeSet};
pub use package_id::PackageId;
pub use package_info::{ExpansionState, PackageInfo};
pub use reverse_index::{ForwardMapping, ReverseIndex};
