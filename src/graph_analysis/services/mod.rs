mod graph_builder;
mod graph_comparator;
mod graph_query;
mod package_filter;

pub use graph_builder::GraphBuilder;
pub use graph_comparator::GraphComparator;
pub use graph_query::{GraphQueryService, GraphSummary};
pub use package_filter::PackageFilter;
