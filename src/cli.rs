use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::ReportFormat;
use crate::config::ProviderKind;

/// Build, query and compare dependency graphs of Python packages
#[derive(Parser, Debug)]
#[command(name = "pkgdep-graph")]
#[command(version)]
#[command(
    about = "Build, query and compare dependency graphs of Python packages",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a config file (defaults to ./pkgdep.config.yml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the report to this file instead of stdout
    #[arg(short, long, global = true, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Read package metadata from a TOML repository file (test mode)
    #[arg(long, global = true, value_name = "PATH")]
    pub test_repo: Option<PathBuf>,

    /// Metadata source outside test mode: pip or pypi
    #[arg(long, global = true)]
    pub provider: Option<ProviderKind>,

    /// Registry base URL for the pypi provider
    #[arg(long, global = true, value_name = "URL")]
    pub repository_url: Option<String>,

    /// Python interpreter used to run pip
    #[arg(long, global = true, value_name = "PATH")]
    pub python: Option<String>,

    /// Exclude packages matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "pytest*" -e "types-*"
    #[arg(short, long = "exclude", global = true, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Skip packages whose names contain this substring
    #[arg(long, global = true, value_name = "TEXT")]
    pub filter: Option<String>,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the graph and print forward and reverse dependencies
    Graph {
        /// Packages to start from (defaults to package_name from the config)
        packages: Vec<String>,

        /// Start from every installed package
        #[arg(long, conflicts_with = "packages")]
        all: bool,

        #[command(flatten)]
        common: GraphOptions,
    },

    /// Show direct dependencies and dependents of one package
    Query {
        /// Package to look up (defaults to package_name from the config)
        package: Option<String>,

        #[command(flatten)]
        common: GraphOptions,
    },

    /// Compare our graph for a package with pipdeptree's
    Compare {
        /// Package to compare (defaults to package_name from the config)
        package: Option<String>,

        /// Exit with code 1 when the graphs differ
        #[arg(long)]
        fail_on_diff: bool,

        #[command(flatten)]
        common: GraphOptions,
    },

    /// Print the effective configuration
    Config,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct GraphOptions {
    /// Maximum traversal depth; starting packages are at depth 1
    #[arg(short = 'd', long, value_name = "N", allow_negative_numbers = true)]
    pub max_depth: Option<i64>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: ReportFormat,
}

impl Command {
    pub fn options(&self) -> Option<&GraphOptions> {
        match self {
            Command::Graph { common, .. }
            | Command::Query { common, .. }
            | Command::Compare { common, .. } => Some(common),
            Command::Config => None,
        }
    }
}
