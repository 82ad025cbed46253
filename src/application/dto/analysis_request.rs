use crate::graph_analysis::domain::PackageId;
use crate::shared::error::AnalyzerError;
use crate::shared::Result;

/// AnalysisRequest - what to build a dependency graph from
///
/// Built through [`AnalysisRequest::builder`], which enforces that
/// `max_depth` is at least 1 and that there is something to start from.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    /// Explicit starting packages, in the order given
    pub seeds: Vec<PackageId>,
    /// Start from every installed package instead of `seeds`
    pub all_installed: bool,
    pub max_depth: usize,
    /// Wildcard patterns for packages to leave out of the graph
    pub exclude_patterns: Vec<String>,
    /// Leave out packages whose names contain this substring
    pub filter_substring: Option<String>,
}

impl AnalysisRequest {
    pub fn builder() -> AnalysisRequestBuilder {
        AnalysisRequestBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct AnalysisRequestBuilder {
    seeds: Vec<PackageId>,
    all_installed: bool,
    max_depth: Option<usize>,
    exclude_patterns: Vec<String>,
    filter_substring: Option<String>,
}

impl AnalysisRequestBuilder {
    pub fn seed(mut self, seed: PackageId) -> Self {
        self.seeds.push(seed);
        self
    }

    pub fn seeds(mut self, seeds: impl IntoIterator<Item = PackageId>) -> Self {
        self.seeds.extend(seeds);
        self
    }

    pub fn all_installed(mut self, all_installed: bool) -> Self {
        self.all_installed = all_installed;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    pub fn filter_substring(mut self, substring: Option<String>) -> Self {
        self.filter_substring = substring;
        self
    }

    /// # Errors
    /// `AnalyzerError::Validation` when `max_depth` is missing or 0, when no
    /// seed is given without `all_installed`, or when both are given.
    pub fn build(self) -> Result<AnalysisRequest> {
        let max_depth = self.max_depth.ok_or_else(|| validation("max_depth is required"))?;
        if max_depth < 1 {
            return Err(validation("max_depth must be at least 1"));
        }

        if self.all_installed && !self.seeds.is_empty() {
            return Err(validation(
                "explicit packages cannot be combined with all installed packages",
            ));
        }
        if !self.all_installed && self.seeds.is_empty() {
            return Err(validation("at least one package is required"));
        }

        Ok(AnalysisRequest {
            seeds: self.seeds,
            all_installed: self.all_installed,
            max_depth,
            exclude_patterns: self.exclude_patterns,
            filter_substring: self.filter_substring,
        })
    }
}

fn validation(message: &str) -> anyhow::Error {
    AnalyzerError::Validation {
        message: message.to_string(),
    }
    .into()
}
