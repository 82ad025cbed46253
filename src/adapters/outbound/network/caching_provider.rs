use crate::graph_analysis::domain::PackageId;
use crate::ports::outbound::MetadataProvider;
use crate::shared::Result;
use std::cell::RefCell;
use std::collections::HashMap;

/// CachingMetadataProvider wraps a MetadataProvider and adds in-memory caching.
///
/// Decorator over any provider: every package is asked for at most once per
/// process, across graph builds. Failures are cached too and replayed as
/// errors, so a rebuild still marks the package as unresolved.
///
/// Not thread-safe; the graph builder is single-threaded.
pub struct CachingMetadataProvider<P: MetadataProvider> {
    inner: P,
    /// `None` records a failed lookup.
    cache: RefCell<HashMap<PackageId, Option<Vec<String>>>>,
}

impl<P: MetadataProvider> CachingMetadataProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn cache_size(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<P: MetadataProvider> MetadataProvider for CachingMetadataProvider<P> {
    fn get_direct_dependencies(&self, package: &PackageId) -> Result<Vec<String>> {
        if let Some(cached) = self.cache.borrow().get(package) {
            return match cached {
                Some(dependencies) => Ok(dependencies.clone()),
                None => Err(anyhow::anyhow!(
                    "metadata for '{}' is unavailable (earlier lookup failed)",
                    package
                )),
            };
        }

        let result = self.inner.get_direct_dependencies(package);
        self.cache
            .borrow_mut()
            .insert(package.clone(), result.as_ref().ok().cloned());

        result
    }
}
