use pkgdep_graph::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock MetadataProvider backed by a table, recording every lookup
#[derive(Default, Clone)]
pub struct MockMetadataProvider {
    table: HashMap<String, Vec<String>>,
    failing: HashSet<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockMetadataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(mut self, name: &str, dependencies: &[&str]) -> Self {
        self.table.insert(
            name.to_string(),
            dependencies.iter().map(|d| d.to_string()).collect(),
        );
        self
    }

    /// Lookups for `name` fail, as if the registry were unreachable.
    pub fn with_failure(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, name: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.as_str() == name)
            .count()
    }
}

impl MetadataProvider for MockMetadataProvider {
    fn get_direct_dependencies(&self, package: &PackageId) -> Result<Vec<String>> {
        self.calls.lock().unwrap().push(package.to_string());

        if self.failing.contains(package.as_str()) {
            anyhow::bail!("mock registry unavailable for {}", package);
        }

        Ok(self.table.get(package.as_str()).cloned().unwrap_or_default())
    }
}
