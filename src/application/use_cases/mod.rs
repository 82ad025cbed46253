/// Use cases module containing application business logic orchestration
mod analyze_dependencies;
mod compare_graphs;

pub use analyze_dependencies::AnalyzeDependenciesUseCase;
pub use compare_graphs::CompareGraphsUseCase;
