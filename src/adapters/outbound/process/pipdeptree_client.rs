use super::run_tool;
use crate::graph_analysis::domain::{NodeEdgeSet, PackageId};
use crate::ports::outbound::ComparisonSource;
use crate::shared::Result;
use serde::Deserialize;
use std::process::Command;

const PIPDEPTREE: &str = "pipdeptree";
const INSTALL_HINT: &str = "Install it with: pip install pipdeptree";

#[derive(Debug, Deserialize)]
struct TreeEntry {
    package: TreePackage,
    #[serde(default)]
    dependencies: Vec<TreePackage>,
}

#[derive(Debug, Deserialize)]
struct TreePackage {
    key: String,
}

/// PipdeptreeComparisonSource adapter producing the reference graph from
/// `pipdeptree -p <package> --json`
///
/// The graph holds the root and its direct dependencies only. Extras are
/// stripped from dependency keys and names are canonicalised the same way
/// the graph builder does it.
pub struct PipdeptreeComparisonSource {
    program: String,
}

impl PipdeptreeComparisonSource {
    pub fn new() -> Self {
        Self {
            program: PIPDEPTREE.to_string(),
        }
    }

    /// Uses `program` instead of `pipdeptree` from `PATH`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for PipdeptreeComparisonSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparisonSource for PipdeptreeComparisonSource {
    fn fetch_graph(&self, package: &PackageId) -> Result<NodeEdgeSet> {
        let mut command = Command::new(&self.program);
        command.args(["-p", package.as_str(), "--json"]);
        let output = run_tool(command, PIPDEPTREE, INSTALL_HINT)?;

        if !output.status.success() {
            anyhow::bail!(
                "pipdeptree failed ({}): {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        parse_pipdeptree_json(&String::from_utf8_lossy(&output.stdout), package)
    }

    fn label(&self) -> &str {
        PIPDEPTREE
    }
}

fn parse_pipdeptree_json(stdout: &str, package: &PackageId) -> Result<NodeEdgeSet> {
    let entries: Vec<TreeEntry> = serde_json::from_str(stdout)
        .map_err(|e| anyhow::anyhow!("Failed to parse pipdeptree output: {}", e))?;

    let mut graph = NodeEdgeSet::new();
    let Some(entry) = entries
        .iter()
        .find(|entry| PackageId::canonical(&entry.package.key) == *package)
    else {
        tracing::warn!(package = %package, "pipdeptree did not report the package");
        return Ok(graph);
    };

    graph.add_node(package.as_str());
    for dependency in &entry.dependencies {
        let name = strip_extras(&dependency.key);
        if name.is_empty() {
            continue;
        }
        graph.add_edge(package.as_str(), PackageId::canonical(name).as_str());
    }

    Ok(graph)
}

fn strip_extras(key: &str) -> &str {
    key.split('[').next().unwrap_or(key).trim()
}
