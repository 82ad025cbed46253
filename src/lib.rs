//! pkgdep-graph - dependency graph construction for Python packages
//!
//! Builds a directed dependency graph by querying per-package metadata
//! (pip, the PyPI JSON API, or a TOML repository file), derives the reverse
//! index, answers per-package queries, and compares the result with an
//! independent reference such as pipdeptree.
//!
//! # Architecture
//!
//! - **Domain Layer** (`graph_analysis`): graph model, builder, query and comparison services
//! - **Application Layer** (`application`): use cases, DTOs and adapter factories
//! - **Ports** (`ports`): traits the core uses to reach infrastructure
//! - **Adapters** (`adapters`): pip, PyPI, filesystem, console and formatter implementations
//! - **Shared** (`shared`): error types, result alias and file security checks
//!
//! # Example
//!
//! ```no_run
//! use pkgdep_graph::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let provider = PipMetadataProvider::new("python3");
//! let use_case = AnalyzeDependenciesUseCase::new(
//!     CachingMetadataProvider::new(PipMetadataProvider::new("python3")),
//!     provider,
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = AnalysisRequest::builder()
//!     .seed(PackageId::new("requests")?)
//!     .max_depth(3)
//!     .build()?;
//! let response = use_case.execute(request)?;
//!
//! let info = GraphQueryService::new(&response.graph).query("urllib3");
//! println!("{} is needed by {:?}", info.package, info.dependents);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod graph_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, RepositoryFileProvider, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::network::{CachingMetadataProvider, PyPiMetadataProvider};
    pub use crate::adapters::outbound::process::{PipMetadataProvider, PipdeptreeComparisonSource};
    pub use crate::application::dto::{AnalysisRequest, AnalysisResponse, ReportFormat};
    pub use crate::application::use_cases::{AnalyzeDependenciesUseCase, CompareGraphsUseCase};
    pub use crate::graph_analysis::domain::{
        ComparisonResult, DependencyGraph, ExpansionState, NodeEdgeSet, PackageId, PackageInfo,
    };
    pub use crate::graph_analysis::services::{
        GraphBuilder, GraphComparator, GraphQueryService, PackageFilter,
    };
    pub use crate::ports::outbound::{
        ComparisonSource, InstalledPackageSource, MetadataProvider, OutputPresenter,
        ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::Result;
}
