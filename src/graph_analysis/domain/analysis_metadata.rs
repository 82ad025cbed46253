use chrono::{DateTime, Utc};
use serde::Serialize;

/// Describes the run that produced a graph.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisMetadata {
    generated_at: DateTime<Utc>,
    tool_name: String,
    tool_version: String,
    max_depth: usize,
    seed_count: usize,
}

impl AnalysisMetadata {
    pub fn new(
        generated_at: DateTime<Utc>,
        tool_name: String,
        tool_version: String,
        max_depth: usize,
        seed_count: usize,
    ) -> Self {
        Self {
            generated_at,
            tool_name,
            tool_version,
            max_depth,
            seed_count,
        }
    }

    /// Metadata for a run happening now, tagged with this crate's name and version.
    pub fn for_current_run(max_depth: usize, seed_count: usize) -> Self {
        Self::new(
            Utc::now(),
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
            max_depth,
            seed_count,
        )
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn seed_count(&self) -> usize {
        self.seed_count
    }
}
