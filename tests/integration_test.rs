/// Integration tests for pkgdep-graph
/// Drives the use cases end to end with mock adapters and the repository file provider
mod test_utilities;

use pkgdep_graph::prelude::*;
use std::path::Path;
use test_utilities::mocks::{
    MockComparisonSource, MockInstalledPackages, MockMetadataProvider, MockProgressReporter,
};

fn id(name: &str) -> PackageId {
    PackageId::new(name).unwrap()
}

fn ids(names: &[&str]) -> Vec<PackageId> {
    names.iter().map(|n| id(n)).collect()
}

fn request(seeds: &[&str], max_depth: usize) -> AnalysisRequest {
    AnalysisRequest::builder()
        .seeds(ids(seeds))
        .max_depth(max_depth)
        .build()
        .unwrap()
}

fn diamond() -> MockMetadataProvider {
    MockMetadataProvider::new()
        .with_package("a", &["b", "c"])
        .with_package("b", &["c"])
        .with_package("c", &[])
}

#[test]
fn test_diamond_graph_through_use_case() {
    let provider = diamond();
    let reporter = MockProgressReporter::new();
    let use_case = AnalyzeDependenciesUseCase::new(
        provider.clone(),
        MockInstalledPackages::new(&[]),
        reporter.clone(),
    );

    let response = use_case.execute(request(&["a"], 3)).unwrap();
    let graph = &response.graph;

    assert_eq!(graph.dependencies_of("a").unwrap(), ids(&["b", "c"]).as_slice());
    assert_eq!(graph.dependencies_of("b").unwrap(), ids(&["c"]).as_slice());
    assert!(graph.dependencies_of("c").unwrap().is_empty());
    assert_eq!(graph.dependents_of("c"), ids(&["a", "b"]).as_slice());
    assert_eq!(graph.dependents_of("b"), ids(&["a"]).as_slice());
    assert!(graph.dependents_of("a").is_empty());
    assert!(graph.unresolved().is_empty());

    // Each package is looked up exactly once, even though c is reachable twice.
    assert_eq!(provider.call_count("c"), 1);
    assert_eq!(provider.calls().len(), 3);

    assert_eq!(response.seeds, ids(&["a"]));
    assert_eq!(response.metadata.max_depth(), 3);
    assert_eq!(response.metadata.seed_count(), 1);

    let messages = reporter.get_messages();
    assert!(messages.contains(&"Progress: 1/1 - a".to_string()));
    assert!(messages
        .iter()
        .any(|m| m.starts_with("Completed: ") && m.contains("3 package(s), 3 edge(s)")));
    assert!(reporter.warnings().is_empty());
}

#[test]
fn test_cycle_terminates() {
    let provider = MockMetadataProvider::new()
        .with_package("x", &["y"])
        .with_package("y", &["x"]);
    let use_case = AnalyzeDependenciesUseCase::new(
        provider.clone(),
        MockInstalledPackages::new(&[]),
        MockProgressReporter::new(),
    );

    let graph = use_case.execute(request(&["x"], 10)).unwrap().graph;

    assert_eq!(graph.dependencies_of("x").unwrap(), ids(&["y"]).as_slice());
    assert_eq!(graph.dependencies_of("y").unwrap(), ids(&["x"]).as_slice());
    assert_eq!(graph.dependents_of("x"), ids(&["y"]).as_slice());
    assert_eq!(graph.dependents_of("y"), ids(&["x"]).as_slice());
    assert_eq!(provider.calls().len(), 2);
}

#[test]
fn test_depth_limit_truncates_silently() {
    let provider = MockMetadataProvider::new()
        .with_package("a", &["b"])
        .with_package("b", &["c"])
        .with_package("c", &["d"]);
    let reporter = MockProgressReporter::new();
    let use_case = AnalyzeDependenciesUseCase::new(
        provider.clone(),
        MockInstalledPackages::new(&[]),
        reporter.clone(),
    );

    let graph = use_case.execute(request(&["a"], 2)).unwrap().graph;
    let query = GraphQueryService::new(&graph);

    assert!(graph.is_expanded("a"));
    assert!(graph.is_expanded("b"));
    assert!(!graph.is_expanded("c"));
    assert_eq!(query.query("c").state, ExpansionState::NotExpanded);
    assert_eq!(query.query("c").dependents, ids(&["b"]));
    assert_eq!(query.query("d").state, ExpansionState::Unknown);
    assert_eq!(provider.call_count("c"), 0);
    assert!(reporter.warnings().is_empty());
}

#[test]
fn test_depth_one_expands_only_seeds() {
    let use_case = AnalyzeDependenciesUseCase::new(
        diamond(),
        MockInstalledPackages::new(&[]),
        MockProgressReporter::new(),
    );

    let graph = use_case.execute(request(&["a"], 1)).unwrap().graph;

    assert_eq!(graph.expanded_count(), 1);
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.dependents_of("c"), ids(&["a"]).as_slice());
}

#[test]
fn test_provider_failure_is_recorded_and_reported() {
    let provider = MockMetadataProvider::new()
        .with_package("app", &["broken", "ok"])
        .with_package("ok", &[])
        .with_failure("broken");
    let reporter = MockProgressReporter::new();
    let use_case = AnalyzeDependenciesUseCase::new(
        provider,
        MockInstalledPackages::new(&[]),
        reporter.clone(),
    );

    let graph = use_case.execute(request(&["app"], 3)).unwrap().graph;

    assert!(graph.dependencies_of("broken").unwrap().is_empty());
    assert!(graph.is_unresolved("broken"));
    assert_eq!(
        GraphQueryService::new(&graph).query("broken").state,
        ExpansionState::MetadataUnavailable
    );
    assert_eq!(
        GraphQueryService::new(&graph).query("ok").state,
        ExpansionState::Expanded
    );

    let warnings = reporter.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("'broken'"));
}

#[test]
fn test_multiple_seeds_share_visited_set() {
    let provider = MockMetadataProvider::new()
        .with_package("a", &["shared"])
        .with_package("b", &["shared"])
        .with_package("shared", &["leaf"])
        .with_package("leaf", &[]);
    let reporter = MockProgressReporter::new();
    let use_case = AnalyzeDependenciesUseCase::new(
        provider.clone(),
        MockInstalledPackages::new(&[]),
        reporter.clone(),
    );

    let graph = use_case.execute(request(&["a", "b"], 3)).unwrap().graph;

    assert_eq!(provider.call_count("shared"), 1);
    assert_eq!(graph.dependents_of("shared"), ids(&["a", "b"]).as_slice());

    let progress: Vec<String> = reporter
        .get_messages()
        .into_iter()
        .filter(|m| m.starts_with("Progress: "))
        .collect();
    assert_eq!(progress, vec!["Progress: 1/2 - a", "Progress: 2/2 - b"]);
}

#[test]
fn test_all_installed_seeds_are_canonicalised_and_deduplicated() {
    let provider = MockMetadataProvider::new()
        .with_package("django", &["asgiref"])
        .with_package("asgiref", &[]);
    let use_case = AnalyzeDependenciesUseCase::new(
        provider,
        MockInstalledPackages::new(&["Django", "django", "asgiref", "  "]),
        MockProgressReporter::new(),
    );

    let request = AnalysisRequest::builder()
        .all_installed(true)
        .max_depth(2)
        .build()
        .unwrap();
    let response = use_case.execute(request).unwrap();

    assert_eq!(response.seeds, ids(&["django", "asgiref"]));
    assert_eq!(response.metadata.seed_count(), 2);
    assert_eq!(response.graph.expanded_count(), 2);
}

#[test]
fn test_all_installed_listing_failure_is_an_error() {
    let use_case = AnalyzeDependenciesUseCase::new(
        MockMetadataProvider::new(),
        MockInstalledPackages::failing(),
        MockProgressReporter::new(),
    );

    let request = AnalysisRequest::builder()
        .all_installed(true)
        .max_depth(2)
        .build()
        .unwrap();
    assert!(use_case.execute(request).is_err());
}

#[test]
fn test_exclusions_drop_packages_and_warn_on_unused_patterns() {
    let provider = MockMetadataProvider::new()
        .with_package("app", &["pytest-cov", "requests", "types-requests"])
        .with_package("requests", &[]);
    let reporter = MockProgressReporter::new();
    let use_case = AnalyzeDependenciesUseCase::new(
        provider.clone(),
        MockInstalledPackages::new(&[]),
        reporter.clone(),
    );

    let request = AnalysisRequest::builder()
        .seed(id("app"))
        .max_depth(3)
        .exclude_patterns(vec!["pytest*".to_string(), "nothing-*".to_string()])
        .filter_substring(Some("types".to_string()))
        .build()
        .unwrap();
    let graph = use_case.execute(request).unwrap().graph;

    assert_eq!(graph.dependencies_of("app").unwrap(), ids(&["requests"]).as_slice());
    assert!(!graph.contains("pytest-cov"));
    assert!(!graph.contains("types-requests"));
    assert_eq!(provider.call_count("pytest-cov"), 0);

    let warnings = reporter.warnings();
    assert!(warnings.iter().any(|w| w.contains("'nothing-*'")));
    assert!(!warnings.iter().any(|w| w.contains("'pytest*'")));
}

#[test]
fn test_query_reports_dependents_and_state() {
    let provider = MockMetadataProvider::new()
        .with_package("a", &["b", "c"])
        .with_package("b", &["c"]);
    let use_case = AnalyzeDependenciesUseCase::new(
        provider,
        MockInstalledPackages::new(&[]),
        MockProgressReporter::new(),
    );

    let graph = use_case.execute(request(&["a"], 3)).unwrap().graph;
    let query = GraphQueryService::new(&graph);

    let info = query.query("C");
    assert_eq!(info.package, id("c"));
    assert!(info.direct_dependencies.is_empty());
    assert_eq!(info.dependents, ids(&["a", "b"]));
    assert_eq!(info.dependent_count, 2);
    assert_eq!(info.state, ExpansionState::Expanded);

    let missing = query.query("numpy");
    assert!(missing.direct_dependencies.is_empty());
    assert!(missing.dependents.is_empty());
    assert_eq!(missing.state, ExpansionState::Unknown);
}

#[test]
fn test_compare_against_reference() {
    let use_case = AnalyzeDependenciesUseCase::new(
        diamond(),
        MockInstalledPackages::new(&[]),
        MockProgressReporter::new(),
    );
    let graph = use_case.execute(request(&["a"], 3)).unwrap().graph;

    let reference = MockComparisonSource::new()
        .with_edge("a", "b")
        .with_edge("a", "d");
    let comparer = CompareGraphsUseCase::new(reference, MockProgressReporter::new());
    let result = comparer.execute(&graph, &id("a")).unwrap();

    assert_eq!(result.label_a(), "ours");
    assert_eq!(result.label_b(), "mock-tree");
    assert!(result.has_differences());
    assert!(result.nodes().only_in_a().contains("c"));
    assert!(result.nodes().only_in_b().contains("d"));
    assert!(result
        .edges()
        .common()
        .contains(&("a".to_string(), "b".to_string())));
    assert!(!result.explain().is_empty());
}

#[test]
fn test_compare_with_itself_has_no_differences() {
    let use_case = AnalyzeDependenciesUseCase::new(
        diamond(),
        MockInstalledPackages::new(&[]),
        MockProgressReporter::new(),
    );
    let graph = use_case.execute(request(&["a"], 3)).unwrap().graph;

    let result = GraphComparator::compare(&graph.to_node_edge_set(), &graph.to_node_edge_set());
    assert!(!result.has_differences());
    assert_eq!(result.explain().len(), 1);
}

#[test]
fn test_compare_with_empty_reference_warns() {
    let use_case = AnalyzeDependenciesUseCase::new(
        diamond(),
        MockInstalledPackages::new(&[]),
        MockProgressReporter::new(),
    );
    let graph = use_case.execute(request(&["a"], 3)).unwrap().graph;

    let reporter = MockProgressReporter::new();
    let comparer = CompareGraphsUseCase::new(MockComparisonSource::new(), reporter.clone());
    let result = comparer.execute(&graph, &id("a")).unwrap();

    assert_eq!(result.nodes().count_b(), 0);
    assert_eq!(reporter.warnings().len(), 1);
}

#[test]
fn test_caching_provider_keeps_rebuild_consistent() {
    let inner = MockMetadataProvider::new()
        .with_package("app", &["lib", "flaky"])
        .with_package("lib", &[])
        .with_failure("flaky");
    let caching = CachingMetadataProvider::new(inner.clone());

    let first = GraphBuilder::new(&caching).build(&ids(&["app"]), 3);
    let second = GraphBuilder::new(&caching).build(&ids(&["app"]), 3);

    assert_eq!(first.forward(), second.forward());
    assert_eq!(first.unresolved(), second.unresolved());
    assert!(second.is_unresolved("flaky"));
    assert_eq!(inner.calls().len(), 3);
}

#[test]
fn test_repository_fixture_with_use_case() {
    let repository =
        RepositoryFileProvider::from_path(Path::new("tests/fixtures/repository.toml")).unwrap();
    let use_case = AnalyzeDependenciesUseCase::new(
        repository.clone(),
        repository.clone(),
        MockProgressReporter::new(),
    );

    let graph = use_case.execute(request(&["app"], 4)).unwrap().graph;
    let query = GraphQueryService::new(&graph);

    assert_eq!(
        query.query("markupsafe").dependents,
        ids(&["jinja2", "werkzeug"])
    );
    assert!(graph.is_expanded("markupsafe"));
    assert!(!graph.contains("ouroboros"));

    let cycle = use_case.execute(request(&["ouroboros"], 5)).unwrap().graph;
    assert_eq!(cycle.node_count(), 2);
    assert_eq!(cycle.edge_count(), 2);
}

#[test]
fn test_formatters_render_built_graph() {
    let use_case = AnalyzeDependenciesUseCase::new(
        diamond(),
        MockInstalledPackages::new(&[]),
        MockProgressReporter::new(),
    );
    let response = use_case.execute(request(&["a"], 3)).unwrap();

    let text = TextFormatter::plain()
        .format_graph(&response.graph, &response.metadata)
        .unwrap();
    assert!(text.contains("  a -> b, c"));
    assert!(text.contains("  c <- a, b"));

    let json = JsonFormatter::new()
        .format_graph(&response.graph, &response.metadata)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["forward"]["a"], serde_json::json!(["b", "c"]));
    assert_eq!(value["reverse"]["c"], serde_json::json!(["a", "b"]));
}

#[test]
fn test_environment_wide_build_finds_all_dependents() {
    let repository =
        RepositoryFileProvider::from_path(Path::new("tests/fixtures/repository.toml")).unwrap();
    let use_case = AnalyzeDependenciesUseCase::new(
        repository.clone(),
        repository,
        MockProgressReporter::new(),
    );

    let request = AnalysisRequest::builder()
        .all_installed(true)
        .max_depth(3)
        .build()
        .unwrap();
    let graph = use_case.execute(request).unwrap().graph;
    let query = GraphQueryService::new(&graph);

    assert_eq!(query.query("requests").dependents, ids(&["app"]));
    let markupsafe = query.query("markupsafe");
    assert_eq!(markupsafe.dependents, ids(&["jinja2", "werkzeug"]));
    assert_eq!(markupsafe.state, ExpansionState::Expanded);
}
