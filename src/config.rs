//! Configuration file support.
//!
//! Configuration comes from a YAML file (`pkgdep.config.yml`, auto-discovered
//! in the working directory or passed with `--config`), overlaid with
//! command-line overrides and validated before any graph is built.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::graph_analysis::domain::PackageId;
use crate::shared::error::AnalyzerError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "pkgdep.config.yml";

pub const DEFAULT_REPOSITORY_URL: &str = "https://pypi.org/pypi";
pub const DEFAULT_MAX_DEPTH: usize = 3;
pub const DEFAULT_PYTHON: &str = "python3";

/// Where package metadata comes from outside test mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    /// `python -m pip show` against the local environment
    #[default]
    Pip,
    /// The PyPI JSON API
    PyPi,
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pip" => Ok(ProviderKind::Pip),
            "pypi" => Ok(ProviderKind::PyPi),
            _ => Err(format!(
                "Invalid provider: {}. Please specify 'pip' or 'pypi'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::Pip => f.write_str("pip"),
            ProviderKind::PyPi => f.write_str("pypi"),
        }
    }
}

/// Configuration file schema. Every field is optional.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub package_name: Option<String>,
    pub repository_url: Option<String>,
    pub test_mode: Option<bool>,
    pub package_version: Option<String>,
    /// Signed so that `0` and negative values reach validation instead of
    /// failing as a YAML type error.
    pub max_depth: Option<i64>,
    pub filter_substring: Option<String>,
    pub provider: Option<String>,
    pub python: Option<String>,
    pub exclude_packages: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Values given on the command line; they take precedence over the file.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub package_name: Option<String>,
    pub repository_url: Option<String>,
    pub test_mode: Option<bool>,
    pub package_version: Option<String>,
    pub max_depth: Option<i64>,
    pub filter_substring: Option<String>,
    pub provider: Option<ProviderKind>,
    pub python: Option<String>,
    pub exclude_packages: Vec<String>,
}

/// Effective, validated configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    pub package_name: Option<String>,
    pub repository_url: String,
    pub test_mode: bool,
    pub package_version: Option<String>,
    pub max_depth: usize,
    pub filter_substring: Option<String>,
    pub provider: ProviderKind,
    pub python: String,
    pub exclude_packages: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            package_name: None,
            repository_url: DEFAULT_REPOSITORY_URL.to_string(),
            test_mode: false,
            package_version: None,
            max_depth: DEFAULT_MAX_DEPTH,
            filter_substring: None,
            provider: ProviderKind::default(),
            python: DEFAULT_PYTHON.to_string(),
            exclude_packages: Vec::new(),
        }
    }
}

impl AnalyzerConfig {
    /// Merges defaults, the optional file, and CLI overrides (in that order),
    /// then validates the result.
    pub fn resolve(file: Option<ConfigFile>, overrides: ConfigOverrides) -> Result<Self> {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let provider = match overrides.provider {
            Some(kind) => kind,
            None => match file.provider.as_deref() {
                Some(raw) => raw.parse().map_err(|reason| AnalyzerError::InvalidParameter {
                    name: "provider".to_string(),
                    reason,
                })?,
                None => defaults.provider,
            },
        };

        let raw_depth = overrides
            .max_depth
            .or(file.max_depth)
            .unwrap_or(DEFAULT_MAX_DEPTH as i64);
        let max_depth = validate_max_depth(raw_depth)?;

        let mut exclude_packages = file.exclude_packages.unwrap_or_default();
        exclude_packages.extend(overrides.exclude_packages);

        let config = Self {
            package_name: non_blank(overrides.package_name.or(file.package_name)),
            repository_url: non_blank(overrides.repository_url.or(file.repository_url))
                .unwrap_or(defaults.repository_url),
            test_mode: overrides.test_mode.or(file.test_mode).unwrap_or(false),
            package_version: non_blank(overrides.package_version.or(file.package_version)),
            max_depth,
            filter_substring: non_blank(overrides.filter_substring.or(file.filter_substring)),
            provider,
            python: non_blank(overrides.python.or(file.python)).unwrap_or(defaults.python),
            exclude_packages,
        };

        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field rules that the merge cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth < 1 {
            return Err(invalid("max_depth", "must be at least 1".to_string()));
        }

        if let Some(name) = &self.package_name {
            PackageId::new(name).map_err(|e| invalid("package_name", e.to_string()))?;
        }

        if self.test_mode {
            if self.repository_url == DEFAULT_REPOSITORY_URL {
                return Err(invalid(
                    "repository_url",
                    "test mode needs repository_url to point to a repository file".to_string(),
                ));
            }
        } else if self.provider == ProviderKind::PyPi
            && !(self.repository_url.starts_with("https://")
                || self.repository_url.starts_with("http://"))
        {
            return Err(invalid(
                "repository_url",
                format!(
                    "'{}' is not an http(s) URL; use test_mode for a local repository file",
                    self.repository_url
                ),
            ));
        }

        Ok(())
    }

    /// The root package, required by every command that does not analyse the
    /// whole environment.
    pub fn require_package(&self) -> Result<PackageId> {
        let name = self
            .package_name
            .as_deref()
            .ok_or_else(|| AnalyzerError::MissingParameter {
                name: "package_name".to_string(),
            })?;
        PackageId::new(name)
    }

    /// Key/value listing for the `config` command.
    pub fn display_lines(&self) -> Vec<(&'static str, String)> {
        let or_unset = |v: &Option<String>| v.clone().unwrap_or_else(|| "(not set)".to_string());
        vec![
            ("Package name", or_unset(&self.package_name)),
            ("Repository URL", self.repository_url.clone()),
            (
                "Test repository mode",
                if self.test_mode { "enabled" } else { "disabled" }.to_string(),
            ),
            ("Package version", or_unset(&self.package_version)),
            ("Maximum depth", self.max_depth.to_string()),
            ("Filter substring", or_unset(&self.filter_substring)),
            ("Metadata provider", self.provider.to_string()),
            ("Python interpreter", self.python.clone()),
            (
                "Excluded packages",
                if self.exclude_packages.is_empty() {
                    "(none)".to_string()
                } else {
                    self.exclude_packages.join(", ")
                },
            ),
        ]
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Err(AnalyzerError::ConfigNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    let content = read_regular_file(path, "configuration file")?;

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| AnalyzerError::ConfigParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    warn_unknown_fields(&config);
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

fn validate_max_depth(raw: i64) -> Result<usize> {
    if raw < 1 {
        return Err(invalid("max_depth", format!("must be at least 1, got {}", raw)));
    }
    Ok(raw as usize)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn invalid(name: &str, reason: String) -> anyhow::Error {
    AnalyzerError::InvalidParameter {
        name: name.to_string(),
        reason,
    }
    .into()
}

fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        tracing::warn!(field = %key, "unknown config field will be ignored");
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
