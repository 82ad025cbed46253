use crate::graph_analysis::domain::ComparisonResult;

/// DivergenceExplanation policy producing human-readable guesses at why two
/// graphs differ.
///
/// The rules look only at which unique sets are non-empty and at the node
/// counts, so the output is a hint for the reader and not a diagnosis. Names
/// that differ only in canonicalisation (case, `_` vs `-`) between the two
/// inputs show up here as unique nodes on both sides.
pub struct DivergenceExplanation;

impl DivergenceExplanation {
    /// Returns at least one reason; a single "identical" line when nothing differs.
    pub fn reasons(result: &ComparisonResult) -> Vec<String> {
        let a = result.label_a();
        let b = result.label_b();
        let nodes = result.nodes();
        let edges = result.edges();
        let mut reasons = Vec::new();

        if !nodes.only_in_a().is_empty() {
            reasons.push(format!(
                "{} may include transitive or environment-specific dependencies not declared in package metadata",
                a
            ));
        }

        if !nodes.only_in_b().is_empty() {
            reasons.push(format!(
                "{} may report only directly declared dependencies, or include packages not reachable from {}'s starting packages",
                b, a
            ));
        }

        if nodes.count_a() > nodes.count_b() {
            reasons.push(format!(
                "{} may come from a deeper traversal and include indirect dependencies",
                a
            ));
        }

        if nodes.is_identical() && !edges.is_identical() {
            reasons.push(format!(
                "{} and {} know the same packages but disagree on which of them depend on each other",
                a, b
            ));
        }

        if reasons.is_empty() {
            reasons.push("No differences found; both graphs are identical".to_string());
        }

        reasons
    }
}
