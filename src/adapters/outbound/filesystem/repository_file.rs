use crate::graph_analysis::domain::{NodeEdgeSet, PackageId};
use crate::ports::outbound::{ComparisonSource, InstalledPackageSource, MetadataProvider};
use crate::shared::error::AnalyzerError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RepositoryFile {
    #[serde(default)]
    packages: BTreeMap<String, Vec<String>>,
}

/// RepositoryFileProvider - a synthetic package repository read from TOML
///
/// Used in test mode, so graphs can be built without pip or the network:
///
/// ```toml
/// [packages]
/// app = ["flask", "requests"]
/// flask = ["werkzeug", "click"]
/// click = []
/// ```
///
/// Names are matched case-insensitively. A package missing from the file has
/// no dependencies.
///
/// As a comparison source it plays the part pipdeptree plays for a real
/// environment: the root and its declared dependencies, one level deep.
#[derive(Debug, Clone)]
pub struct RepositoryFileProvider {
    /// Keyed by canonical name; values keep file order and spelling.
    packages: HashMap<String, Vec<String>>,
    /// Canonical names, in key order of the parsed table.
    names: Vec<String>,
}

impl RepositoryFileProvider {
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = read_regular_file(path, "repository file")?;
        Self::from_toml_str(&content).map_err(|e| {
            AnalyzerError::FileReadError {
                path: path.to_path_buf(),
                details: format!("Invalid repository file: {}", e),
            }
            .into()
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: RepositoryFile = toml::from_str(content)?;

        let mut packages = HashMap::with_capacity(file.packages.len());
        let mut names = Vec::with_capacity(file.packages.len());
        for (name, dependencies) in file.packages {
            let key = PackageId::canonical(&name).as_str().to_string();
            if packages.insert(key.clone(), dependencies).is_some() {
                anyhow::bail!("package '{}' is listed more than once", key);
            }
            names.push(key);
        }

        tracing::debug!(packages = names.len(), "loaded repository file");
        Ok(Self { packages, names })
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl MetadataProvider for RepositoryFileProvider {
    fn get_direct_dependencies(&self, package: &PackageId) -> Result<Vec<String>> {
        Ok(self
            .packages
            .get(package.as_str())
            .cloned()
            .unwrap_or_default())
    }
}

impl InstalledPackageSource for RepositoryFileProvider {
    fn list_installed(&self) -> Result<Vec<String>> {
        Ok(self.names.clone())
    }
}

impl ComparisonSource for RepositoryFileProvider {
    fn fetch_graph(&self, package: &PackageId) -> Result<NodeEdgeSet> {
        let mut graph = NodeEdgeSet::new();
        let Some(dependencies) = self.packages.get(package.as_str()) else {
            return Ok(graph);
        };

        graph.add_node(package.as_str());
        for dependency in dependencies {
            let dependency = PackageId::canonical(dependency);
            if !dependency.is_empty() {
                graph.add_edge(package.as_str(), dependency.as_str());
            }
        }
        Ok(graph)
    }

    fn label(&self) -> &str {
        "repository"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const REPOSITORY: &str = r#"
[packages]
app = ["Flask", "requests"]
flask = ["werkzeug", "click"]
requests = ["urllib3", "click"]
click = []
"#;

    fn deps(provider: &RepositoryFileProvider, name: &str) -> Vec<String> {
        provider
            .get_direct_dependencies(&PackageId::canonical(name))
            .unwrap()
    }

    #[test]
    fn test_dependencies_from_file() {
        let provider = RepositoryFileProvider::from_toml_str(REPOSITORY).unwrap();

        assert_eq!(provider.len(), 4);
        assert_eq!(deps(&provider, "app"), vec!["Flask", "requests"]);
        assert_eq!(deps(&provider, "FLASK"), vec!["werkzeug", "click"]);
        assert!(deps(&provider, "click").is_empty());
    }

    #[test]
    fn test_unknown_package_has_no_dependencies() {
        let provider = RepositoryFileProvider::from_toml_str(REPOSITORY).unwrap();
        assert!(deps(&provider, "numpy").is_empty());
    }

    #[test]
    fn test_list_installed() {
        let provider = RepositoryFileProvider::from_toml_str(REPOSITORY).unwrap();
        assert_eq!(
            provider.list_installed().unwrap(),
            vec!["app", "click", "flask", "requests"]
        );
    }

    #[test]
    fn test_reference_graph_is_one_level() {
        let provider = RepositoryFileProvider::from_toml_str(REPOSITORY).unwrap();
        let graph = provider.fetch_graph(&PackageId::canonical("app")).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert!(graph.contains_edge("app", "flask"));
        assert!(graph.contains_edge("app", "requests"));
        assert!(!graph.contains_node("click"));
        assert_eq!(provider.label(), "repository");
    }

    #[test]
    fn test_reference_graph_for_unknown_package_is_empty() {
        let provider = RepositoryFileProvider::from_toml_str(REPOSITORY).unwrap();
        assert!(provider
            .fetch_graph(&PackageId::canonical("numpy"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_empty_file() {
        let provider = RepositoryFileProvider::from_toml_str("").unwrap();
        assert!(provider.is_empty());
    }

    #[test]
    fn test_duplicate_package_after_canonicalisation() {
        let err = RepositoryFileProvider::from_toml_str("[packages]\nFlask = []\nflask = []\n")
            .unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("repo.toml");
        fs::write(&path, "[packages]\napp = \"flask\"\n").unwrap();

        let err = RepositoryFileProvider::from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid repository file"));
    }

    #[test]
    fn test_missing_file() {
        let err = RepositoryFileProvider::from_path(Path::new("/nonexistent/repo.toml"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
