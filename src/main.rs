use clap::Parser;
use pkgdep_graph::adapters::outbound::console::StderrProgressReporter;
use pkgdep_graph::application::dto::{AnalysisRequest, ProviderSelection, ReportFormat};
use pkgdep_graph::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType, ProviderFactory, Providers,
};
use pkgdep_graph::application::use_cases::{AnalyzeDependenciesUseCase, CompareGraphsUseCase};
use pkgdep_graph::cli::{Args, Command};
use pkgdep_graph::config::{
    discover_config, load_config_from_path, AnalyzerConfig, ConfigOverrides, ProviderKind,
};
use pkgdep_graph::graph_analysis::domain::PackageId;
use pkgdep_graph::graph_analysis::services::GraphQueryService;
use pkgdep_graph::ports::outbound::{ComparisonSource, InstalledPackageSource, MetadataProvider};
use pkgdep_graph::shared::error::{AnalyzerError, ExitCode};
use pkgdep_graph::shared::Result;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here, on stdout.
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    init_tracing(args.verbose);

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(exit_code_for(&e).as_i32());
        }
    }
}

/// Logs go to stderr so reports on stdout stay machine-readable.
/// `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "pkgdep_graph=debug"
    } else {
        "pkgdep_graph=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<AnalyzerError>() {
        Some(
            AnalyzerError::MissingParameter { .. }
            | AnalyzerError::InvalidParameter { .. }
            | AnalyzerError::Validation { .. },
        ) => ExitCode::InvalidArguments,
        _ => ExitCode::ApplicationError,
    }
}

fn run(args: Args) -> Result<ExitCode> {
    tracing::debug!(?args, "starting");

    let config = load_effective_config(&args)?;
    let presenter_type = PresenterType::from_output(args.output.clone());

    let format = args
        .command
        .options()
        .map(|options| options.format)
        .unwrap_or_default();
    let colored = format == ReportFormat::Text
        && presenter_type.is_stdout()
        && std::io::stdout().is_terminal()
        && std::env::var_os("NO_COLOR").is_none();
    let formatter = FormatterFactory::create(format, colored);

    let mut exit_code = ExitCode::Success;
    let report = match &args.command {
        Command::Config => config_listing(&config),
        Command::Graph { packages, all, .. } => {
            let seeds = if *all {
                Vec::new()
            } else if packages.is_empty() {
                vec![config.require_package()?]
            } else {
                packages
                    .iter()
                    .map(|name| PackageId::new(name))
                    .collect::<Result<Vec<_>>>()?
            };
            let (analyzer, _) = wire_adapters(&config)?;
            let response = analyzer.execute(analysis_request(&config, seeds, *all)?)?;
            formatter.format_graph(&response.graph, &response.metadata)?
        }
        Command::Query { .. } => {
            // Dependents are only known for packages reachable from some seed,
            // so the whole environment is traversed.
            let package = config.require_package()?;
            let (analyzer, _) = wire_adapters(&config)?;
            let response = analyzer.execute(analysis_request(&config, Vec::new(), true)?)?;
            let info = GraphQueryService::new(&response.graph).query(package.as_str());
            formatter.format_package(&info)?
        }
        Command::Compare { fail_on_diff, .. } => {
            let package = config.require_package()?;
            let (analyzer, reference) = wire_adapters(&config)?;
            let response =
                analyzer.execute(analysis_request(&config, vec![package.clone()], false)?)?;

            let comparer = CompareGraphsUseCase::new(reference, StderrProgressReporter::new());
            let result = comparer.execute(&response.graph, &package)?;
            if *fail_on_diff && result.has_differences() {
                exit_code = ExitCode::DifferencesFound;
            }
            formatter.format_comparison(&result)?
        }
    };

    PresenterFactory::create(presenter_type).present(&report)?;
    Ok(exit_code)
}

fn config_listing(config: &AnalyzerConfig) -> String {
    let mut listing = String::from("Effective configuration:\n");
    for (label, value) in config.display_lines() {
        listing.push_str(&format!("  {}: {}\n", label, value));
    }
    listing
}

type Analyzer = AnalyzeDependenciesUseCase<
    Box<dyn MetadataProvider>,
    Box<dyn InstalledPackageSource>,
    StderrProgressReporter,
>;

fn wire_adapters(config: &AnalyzerConfig) -> Result<(Analyzer, Box<dyn ComparisonSource>)> {
    let Providers {
        metadata,
        installed,
        reference,
    } = ProviderFactory::create(&provider_selection(config)?)?;
    let analyzer =
        AnalyzeDependenciesUseCase::new(metadata, installed, StderrProgressReporter::new());
    Ok((analyzer, reference))
}

fn load_effective_config(args: &Args) -> Result<AnalyzerConfig> {
    let file = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };

    let package_name = match &args.command {
        Command::Query { package, .. } | Command::Compare { package, .. } => package.clone(),
        Command::Graph { .. } | Command::Config => None,
    };

    let overrides = ConfigOverrides {
        package_name,
        repository_url: args
            .test_repo
            .as_ref()
            .map(|path| path.display().to_string())
            .or_else(|| args.repository_url.clone()),
        test_mode: args.test_repo.as_ref().map(|_| true),
        package_version: None,
        max_depth: args.command.options().and_then(|options| options.max_depth),
        filter_substring: args.filter.clone(),
        provider: args.provider,
        python: args.python.clone(),
        exclude_packages: args.exclude.clone(),
    };

    AnalyzerConfig::resolve(file, overrides)
}

fn provider_selection(config: &AnalyzerConfig) -> Result<ProviderSelection> {
    if config.test_mode {
        return Ok(ProviderSelection::RepositoryFile(PathBuf::from(
            &config.repository_url,
        )));
    }

    Ok(match config.provider {
        ProviderKind::Pip => ProviderSelection::Pip {
            python: config.python.clone(),
        },
        ProviderKind::PyPi => {
            let pinned = match (&config.package_name, &config.package_version) {
                (Some(name), Some(version)) => Some((PackageId::new(name)?, version.clone())),
                _ => None,
            };
            ProviderSelection::PyPi {
                base_url: config.repository_url.clone(),
                python: config.python.clone(),
                pinned,
            }
        }
    })
}

fn analysis_request(
    config: &AnalyzerConfig,
    seeds: Vec<PackageId>,
    all_installed: bool,
) -> Result<AnalysisRequest> {
    AnalysisRequest::builder()
        .seeds(seeds)
        .all_installed(all_installed)
        .max_depth(config.max_depth)
        .exclude_patterns(config.exclude_packages.clone())
        .filter_substring(config.filter_substring.clone())
        .build()
}
