use super::PackageFilter;
use crate::graph_analysis::domain::{DependencyGraph, ForwardMapping, PackageId};
use crate::ports::outbound::MetadataProvider;
use std::collections::{BTreeSet, HashSet};
use std::ops::ControlFlow;

/// State of one build pass. Created by `build_with_hook` and consumed when
/// the pass ends, so nothing leaks from one build into the next.
struct TraversalContext {
    visited: HashSet<PackageId>,
    forward: ForwardMapping,
    unresolved: BTreeSet<PackageId>,
}

impl TraversalContext {
    fn new() -> Self {
        Self {
            visited: HashSet::new(),
            forward: ForwardMapping::new(),
            unresolved: BTreeSet::new(),
        }
    }

    fn into_graph(self) -> DependencyGraph {
        DependencyGraph::new(self.forward, self.unresolved)
    }
}

/// GraphBuilder - depth-bounded traversal over package metadata
///
/// Seeds sit at depth 1 and every dependency one level below its parent. A
/// package is expanded (its metadata fetched and its dependency list
/// recorded) only if its depth is at most `max_depth` and it has not been
/// expanded earlier in the same pass. The visited set is shared by all seeds,
/// so each distinct package costs at most one metadata query per build no
/// matter how many paths lead to it; cycles terminate for the same reason.
///
/// Truncation is silent: a package cut off by the depth limit appears as a
/// dependency value but gets no key in the forward mapping.
///
/// `max_depth` is expected to be at least 1; callers validate it.
pub struct GraphBuilder<'a, P: MetadataProvider + ?Sized> {
    provider: &'a P,
    filter: Option<&'a PackageFilter>,
}

impl<'a, P: MetadataProvider + ?Sized> GraphBuilder<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self {
            provider,
            filter: None,
        }
    }

    /// Excluded packages are neither expanded nor recorded as dependencies.
    pub fn with_filter(mut self, filter: &'a PackageFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn build(&self, seeds: &[PackageId], max_depth: usize) -> DependencyGraph {
        self.build_with_hook(seeds, max_depth, |_, _, _| ControlFlow::Continue(()))
    }

    /// Like [`build`](Self::build), calling `before_seed(index, total, seed)`
    /// ahead of each top-level seed. Returning `ControlFlow::Break` stops the
    /// build there and returns what has been collected so far; a seed whose
    /// expansion has started always runs to completion.
    pub fn build_with_hook<F>(
        &self,
        seeds: &[PackageId],
        max_depth: usize,
        mut before_seed: F,
    ) -> DependencyGraph
    where
        F: FnMut(usize, usize, &PackageId) -> ControlFlow<()>,
    {
        let mut ctx = TraversalContext::new();

        for (index, seed) in seeds.iter().enumerate() {
            if before_seed(index, seeds.len(), seed).is_break() {
                tracing::info!(completed = index, total = seeds.len(), "build stopped early");
                break;
            }

            if seed.is_empty() || self.is_excluded(seed) {
                tracing::debug!(seed = %seed, "skipping seed");
                continue;
            }

            self.expand(&mut ctx, seed, 1, max_depth);
        }

        tracing::info!(
            expanded = ctx.forward.len(),
            unresolved = ctx.unresolved.len(),
            max_depth,
            "dependency graph built"
        );

        ctx.into_graph()
    }

    fn expand(&self, ctx: &mut TraversalContext, package: &PackageId, depth: usize, max_depth: usize) {
        if depth > max_depth || ctx.visited.contains(package) {
            return;
        }
        ctx.visited.insert(package.clone());

        let dependencies = self.direct_dependencies(ctx, package);
        tracing::debug!(
            package = %package,
            depth,
            dependencies = dependencies.len(),
            "expanded package"
        );
        ctx.forward.insert(package.clone(), dependencies.clone());

        for dependency in &dependencies {
            if !ctx.visited.contains(dependency) {
                self.expand(ctx, dependency, depth + 1, max_depth);
            }
        }
    }

    /// Provider result normalised to a canonical, de-duplicated, filtered list.
    /// A provider error becomes an empty list and marks the package unresolved.
    fn direct_dependencies(&self, ctx: &mut TraversalContext, package: &PackageId) -> Vec<PackageId> {
        let declared = match self.provider.get_direct_dependencies(package) {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!(
                    package = %package,
                    error = %e,
                    "metadata unavailable, recording no dependencies"
                );
                ctx.unresolved.insert(package.clone());
                Vec::new()
            }
        };

        let mut seen = HashSet::new();
        declared
            .iter()
            .map(|name| PackageId::canonical(name))
            .filter(|id| !id.is_empty() && !self.is_excluded(id))
            .filter(|id| seen.insert(id.clone()))
            .collect()
    }

    fn is_excluded(&self, package: &PackageId) -> bool {
        self.filter
            .is_some_and(|filter| filter.is_excluded(package.as_str()))
    }
}
