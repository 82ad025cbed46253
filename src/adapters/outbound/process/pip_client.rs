use super::run_tool;
use crate::graph_analysis::domain::PackageId;
use crate::ports::outbound::{InstalledPackageSource, MetadataProvider};
use crate::shared::Result;
use serde::Deserialize;
use std::process::Command;

const PYTHON_HINT: &str = "Check the `python` setting; pip must be available as `python -m pip`";

#[derive(Debug, Deserialize)]
struct PipListEntry {
    name: String,
}

/// PipMetadataProvider adapter querying the local environment through pip
///
/// `python -m pip show <package>` supplies direct dependencies; a non-zero
/// exit means the package is not installed and yields an empty list.
/// `python -m pip list --format=json` lists the installed packages.
pub struct PipMetadataProvider {
    python: String,
}

impl PipMetadataProvider {
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }

    fn pip(&self, args: &[&str]) -> Command {
        let mut command = Command::new(&self.python);
        command
            .args(["-m", "pip"])
            .args(args)
            .env("PIP_DISABLE_PIP_VERSION_CHECK", "1");
        command
    }
}

impl MetadataProvider for PipMetadataProvider {
    fn get_direct_dependencies(&self, package: &PackageId) -> Result<Vec<String>> {
        let output = run_tool(self.pip(&["show", package.as_str()]), &self.python, PYTHON_HINT)?;

        if !output.status.success() {
            tracing::debug!(package = %package, "pip show found nothing");
            return Ok(Vec::new());
        }

        Ok(parse_requires(&String::from_utf8_lossy(&output.stdout)))
    }
}

impl InstalledPackageSource for PipMetadataProvider {
    fn list_installed(&self) -> Result<Vec<String>> {
        let output = run_tool(
            self.pip(&["list", "--format=json"]),
            &self.python,
            PYTHON_HINT,
        )?;

        if !output.status.success() {
            anyhow::bail!(
                "pip list failed ({}): {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        parse_pip_list(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Names on the `Requires:` line of `pip show` output.
fn parse_requires(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Requires:"))
        .map(|requires| {
            requires
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn parse_pip_list(stdout: &str) -> Result<Vec<String>> {
    let entries: Vec<PipListEntry> = serde_json::from_str(stdout)
        .map_err(|e| anyhow::anyhow!("Failed to parse pip list output: {}", e))?;
    Ok(entries.into_iter().map(|entry| entry.name).collect())
}
