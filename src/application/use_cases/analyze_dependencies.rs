use crate::application::dto::{AnalysisRequest, AnalysisResponse};
use crate::graph_analysis::domain::{AnalysisMetadata, PackageId};
use crate::graph_analysis::services::{GraphBuilder, GraphQueryService, PackageFilter};
use crate::ports::outbound::{InstalledPackageSource, MetadataProvider, ProgressReporter};
use crate::shared::Result;
use std::collections::HashSet;
use std::ops::ControlFlow;

/// AnalyzeDependenciesUseCase - builds the dependency graph for a request
///
/// # Type Parameters
/// * `MP` - MetadataProvider implementation
/// * `IPS` - InstalledPackageSource implementation, used for `all_installed` runs
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeDependenciesUseCase<MP, IPS, PR> {
    metadata_provider: MP,
    installed_packages: IPS,
    progress_reporter: PR,
}

impl<MP, IPS, PR> AnalyzeDependenciesUseCase<MP, IPS, PR>
where
    MP: MetadataProvider,
    IPS: InstalledPackageSource,
    PR: ProgressReporter,
{
    pub fn new(metadata_provider: MP, installed_packages: IPS, progress_reporter: PR) -> Self {
        Self {
            metadata_provider,
            installed_packages,
            progress_reporter,
        }
    }

    /// Executes the analysis
    ///
    /// # Errors
    /// Invalid exclusion patterns, or failing to list installed packages for
    /// an `all_installed` request. Metadata failures for individual packages
    /// are not errors; they are reported as warnings and recorded in the graph.
    pub fn execute(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        // Step 1: Resolve starting packages
        let seeds = self.resolve_seeds(&request)?;

        // Step 2: Compile exclusion filters
        let filter = PackageFilter::from_config(
            &request.exclude_patterns,
            request.filter_substring.as_deref(),
        )?;

        // Step 3: Traverse
        self.progress_reporter.report(&format!(
            "🔍 Resolving dependencies of {} package(s) (max depth {})...",
            seeds.len(),
            request.max_depth
        ));
        let mut builder = GraphBuilder::new(&self.metadata_provider);
        if let Some(filter) = filter.as_ref() {
            builder = builder.with_filter(filter);
        }
        let graph = builder.build_with_hook(&seeds, request.max_depth, |index, total, seed| {
            self.progress_reporter
                .report_progress(index + 1, total, Some(seed.as_str()));
            ControlFlow::Continue(())
        });

        // Step 4: Surface what could not be resolved
        for package in graph.unresolved() {
            self.progress_reporter.report_warning(&format!(
                "Metadata for '{}' could not be retrieved; it is recorded with no dependencies.",
                package
            ));
        }
        if let Some(filter) = filter.as_ref() {
            for pattern in filter.unmatched_patterns() {
                self.progress_reporter.report_warning(&format!(
                    "Exclude pattern '{}' did not match any dependencies.",
                    pattern
                ));
            }
        }

        let summary = GraphQueryService::new(&graph).summary();
        self.progress_reporter.report_completion(&format!(
            "✅ Dependency graph built: {} package(s), {} edge(s)",
            summary.node_count, summary.edge_count
        ));

        let metadata = AnalysisMetadata::for_current_run(request.max_depth, seeds.len());
        Ok(AnalysisResponse::new(graph, metadata, seeds))
    }

    /// Explicit seeds as given, or every installed package canonicalised and
    /// de-duplicated in listing order.
    fn resolve_seeds(&self, request: &AnalysisRequest) -> Result<Vec<PackageId>> {
        if !request.all_installed {
            return Ok(request.seeds.clone());
        }

        self.progress_reporter
            .report("📦 Listing installed packages...");
        let names = self.installed_packages.list_installed()?;

        let mut seen = HashSet::new();
        let seeds: Vec<PackageId> = names
            .iter()
            .map(|name| PackageId::canonical(name))
            .filter(|id| !id.is_empty() && seen.insert(id.clone()))
            .collect();

        self.progress_reporter
            .report(&format!("✅ Detected {} installed package(s)", seeds.len()));
        tracing::debug!(seeds = seeds.len(), "resolved installed packages");
        Ok(seeds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct TableProvider(HashMap<&'static str, Vec<&'static str>>);

    impl MetadataProvider for TableProvider {
        fn get_direct_dependencies(&self, package: &PackageId) -> Result<Vec<String>> {
            if package.as_str() == "broken" {
                anyhow::bail!("index unreachable");
            }
            Ok(self
                .0
                .get(package.as_str())
                .map(|deps| deps.iter().map(|d| d.to_string()).collect())
                .unwrap_or_default())
        }
    }

    struct Installed(Vec<&'static str>);

    impl InstalledPackageSource for Installed {
        fn list_installed(&self) -> Result<Vec<String>> {
            Ok(self.0.iter().map(|s| s.to_string()).collect())
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        warnings: RefCell<Vec<String>>,
        progress: RefCell<Vec<(usize, usize)>>,
    }

    impl ProgressReporter for &RecordingReporter {
        fn report(&self, _message: &str) {}

        fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
            self.progress.borrow_mut().push((current, total));
        }

        fn report_warning(&self, message: &str) {
            self.warnings.borrow_mut().push(message.to_string());
        }

        fn report_completion(&self, _message: &str) {}
    }

    fn provider() -> TableProvider {
        TableProvider(HashMap::from([
            ("app", vec!["Flask", "requests", "broken"]),
            ("flask", vec!["werkzeug", "click"]),
            ("requests", vec!["urllib3"]),
        ]))
    }

    #[test]
    fn test_execute_with_explicit_seed() {
        let reporter = RecordingReporter::default();
        let use_case = AnalyzeDependenciesUseCase::new(provider(), Installed(vec![]), &reporter);
        let request = AnalysisRequest::builder()
            .seed(PackageId::canonical("app"))
            .max_depth(2)
            .build()
            .unwrap();

        let response = use_case.execute(request).unwrap();

        assert_eq!(response.seeds, vec![PackageId::canonical("app")]);
        assert_eq!(response.metadata.max_depth(), 2);
        assert_eq!(response.metadata.seed_count(), 1);
        assert!(response.graph.is_expanded("flask"));
        assert!(!response.graph.is_expanded("click"));
        assert!(response.graph.is_unresolved("broken"));
        assert_eq!(reporter.progress.borrow().as_slice(), &[(1, 1)]);
        assert_eq!(reporter.warnings.borrow().len(), 1);
        assert!(reporter.warnings.borrow()[0].contains("'broken'"));
    }

    #[test]
    fn test_execute_all_installed() {
        let reporter = RecordingReporter::default();
        let installed = Installed(vec!["Flask", "requests", "flask", "  "]);
        let use_case = AnalyzeDependenciesUseCase::new(provider(), installed, &reporter);
        let request = AnalysisRequest::builder()
            .all_installed(true)
            .max_depth(1)
            .build()
            .unwrap();

        let response = use_case.execute(request).unwrap();

        assert_eq!(
            response.seeds,
            vec![PackageId::canonical("flask"), PackageId::canonical("requests")]
        );
        assert_eq!(response.graph.forward().len(), 2);
        assert_eq!(reporter.progress.borrow().as_slice(), &[(1, 2), (2, 2)]);
    }

    #[test]
    fn test_execute_applies_filters_and_warns_on_unmatched() {
        let reporter = RecordingReporter::default();
        let use_case = AnalyzeDependenciesUseCase::new(provider(), Installed(vec![]), &reporter);
        let request = AnalysisRequest::builder()
            .seed(PackageId::canonical("app"))
            .max_depth(3)
            .exclude_patterns(vec!["werk*".to_string(), "nothing-*".to_string()])
            .filter_substring(Some("lib".to_string()))
            .build()
            .unwrap();

        let response = use_case.execute(request).unwrap();

        assert!(!response.graph.contains("werkzeug"));
        assert!(!response.graph.contains("urllib3"));
        assert!(reporter
            .warnings
            .borrow()
            .iter()
            .any(|w| w.contains("'nothing-*'")));
    }

    #[test]
    fn test_execute_rejects_invalid_pattern() {
        let reporter = RecordingReporter::default();
        let use_case = AnalyzeDependenciesUseCase::new(provider(), Installed(vec![]), &reporter);
        let request = AnalysisRequest::builder()
            .seed(PackageId::canonical("app"))
            .max_depth(1)
            .exclude_patterns(vec!["***".to_string()])
            .build()
            .unwrap();

        assert!(use_case.execute(request).is_err());
    }
}
