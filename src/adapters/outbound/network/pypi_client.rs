use crate::graph_analysis::domain::PackageId;
use crate::ports::outbound::MetadataProvider;
use crate::shared::Result;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct PyPiPackageInfo {
    info: PyPiInfo,
}

#[derive(Debug, Deserialize)]
struct PyPiInfo {
    /// `null` for packages that declare nothing.
    #[serde(default)]
    requires_dist: Option<Vec<String>>,
}

/// PyPiMetadataProvider adapter reading declared dependencies from the PyPI JSON API
///
/// Dependencies come from `info.requires_dist`. Requirements that only apply
/// to an optional extra are skipped; other environment markers are ignored
/// and the requirement is kept.
///
/// A 404 means "no such package" and yields an empty list. Other failures
/// are retried and then returned as errors.
pub struct PyPiMetadataProvider {
    client: reqwest::blocking::Client,
    base_url: String,
    pinned: Option<(PackageId, String)>,
    max_retries: u32,
}

impl PyPiMetadataProvider {
    /// Creates a provider for the registry at `base_url` (for example
    /// `https://pypi.org/pypi`).
    pub fn new(base_url: &str) -> Result<Self> {
        let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            pinned: None,
            max_retries: 3,
        })
    }

    /// Looks up `version` of `package` instead of its latest release.
    pub fn with_pinned_version(mut self, package: PackageId, version: &str) -> Self {
        self.pinned = Some((package, version.to_string()));
        self
    }

    fn pinned_version_of(&self, package: &PackageId) -> Option<&str> {
        self.pinned
            .as_ref()
            .filter(|(pinned, _)| pinned == package)
            .map(|(_, version)| version.as_str())
    }

    /// Validates and sanitizes a package name or version for URL safety
    fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
        if component.contains('/') || component.contains('\\') {
            anyhow::bail!(
                "Security: {} contains path separators which are not allowed",
                component_type
            );
        }

        if component.contains("..") {
            anyhow::bail!(
                "Security: {} contains '..' which is not allowed",
                component_type
            );
        }

        if component.contains('#') || component.contains('?') || component.contains('@') {
            anyhow::bail!("Security: {} contains URL-unsafe characters", component_type);
        }

        Ok(())
    }

    fn package_url(&self, package: &str, version: Option<&str>) -> Result<String> {
        Self::validate_url_component(package, "Package name")?;
        let encoded_package = urlencoding::encode(package);

        match version {
            Some(version) => {
                Self::validate_url_component(version, "Version")?;
                Ok(format!(
                    "{}/{}/{}/json",
                    self.base_url,
                    encoded_package,
                    urlencoding::encode(version)
                ))
            }
            None => Ok(format!("{}/{}/json", self.base_url, encoded_package)),
        }
    }

    /// Fetches package information with retry logic; `None` means 404.
    fn fetch_with_retry(&self, url: &str) -> Result<Option<PyPiPackageInfo>> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch(url) {
                Ok(result) => return Ok(result),
                Err(e) => {
                    tracing::debug!(url, attempt, error = %e, "PyPI request failed");
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        std::thread::sleep(Duration::from_millis(100 * attempt as u64));
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("no request was made to {}", url)))
    }

    fn fetch(&self, url: &str) -> Result<Option<PyPiPackageInfo>> {
        let response = self.client.get(url).send()?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            anyhow::bail!("PyPI API returned status code {}", response.status());
        }

        Ok(Some(response.json()?))
    }
}

impl MetadataProvider for PyPiMetadataProvider {
    fn get_direct_dependencies(&self, package: &PackageId) -> Result<Vec<String>> {
        let url = self.package_url(package.as_str(), self.pinned_version_of(package))?;

        match self.fetch_with_retry(&url)? {
            Some(info) => Ok(parse_requires_dist(
                info.info.requires_dist.as_deref().unwrap_or_default(),
            )),
            None => {
                tracing::debug!(package = %package, "not found on PyPI");
                Ok(Vec::new())
            }
        }
    }
}

/// Extracts requirement names from `requires_dist`, skipping extras-only
/// requirements.
fn parse_requires_dist(requirements: &[String]) -> Vec<String> {
    requirements
        .iter()
        .filter_map(|requirement| {
            let (spec, marker) = match requirement.split_once(';') {
                Some((spec, marker)) => (spec, Some(marker)),
                None => (requirement.as_str(), None),
            };
            if marker.is_some_and(|m| m.contains("extra")) {
                return None;
            }
            requirement_name(spec)
        })
        .collect()
}

/// Leading distribution name of a PEP 508 requirement (`name[extra] (>=1)`).
fn requirement_name(spec: &str) -> Option<String> {
    let spec = spec.trim_start();
    let end = spec
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        .unwrap_or(spec.len());
    let name = &spec[..end];
    (!name.is_empty()).then(|| name.to_string())
}
