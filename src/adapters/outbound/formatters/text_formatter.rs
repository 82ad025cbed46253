use crate::graph_analysis::domain::{
    AnalysisMetadata, ComparisonResult, DependencyGraph, ExpansionState, PackageId, PackageInfo,
    SetComparison,
};
use crate::graph_analysis::services::GraphQueryService;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use owo_colors::{OwoColorize, Style};
use std::fmt::Write;

const MOST_DEPENDED_UPON_LIMIT: usize = 5;

/// TextFormatter adapter rendering reports for a terminal
///
/// Colours are applied only when enabled; reports written to a file or a
/// pipe stay plain.
pub struct TextFormatter {
    colored: bool,
}

impl TextFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.colored {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        self.paint(text, Style::new().bold().cyan())
    }

    fn dimmed(&self, text: &str) -> String {
        self.paint(text, Style::new().dimmed())
    }

    fn join(ids: &[PackageId]) -> String {
        ids.iter().map(PackageId::as_str).collect::<Vec<_>>().join(", ")
    }

    fn render_list(&self, out: &mut String, title: &str, items: &[PackageId]) -> std::fmt::Result {
        writeln!(out, "{} ({}):", self.heading(title), items.len())?;
        if items.is_empty() {
            writeln!(out, "  {}", self.dimmed("(none)"))?;
        }
        for item in items {
            writeln!(out, "  - {}", item)?;
        }
        Ok(())
    }

    fn render_set_counts<T: Ord>(
        &self,
        out: &mut String,
        title: &str,
        set: &SetComparison<T>,
        result: &ComparisonResult,
    ) -> std::fmt::Result {
        writeln!(
            out,
            "{}: {} common, {} only in {}, {} only in {} ({}: {}, {}: {})",
            self.heading(title),
            set.common().len(),
            set.only_in_a().len(),
            result.label_a(),
            set.only_in_b().len(),
            result.label_b(),
            result.label_a(),
            set.count_a(),
            result.label_b(),
            set.count_b()
        )
    }

    fn render_graph(
        &self,
        out: &mut String,
        graph: &DependencyGraph,
        metadata: &AnalysisMetadata,
    ) -> std::fmt::Result {
        let seeds = metadata.seed_count();
        writeln!(
            out,
            "{}",
            self.heading(&format!(
                "Dependency graph (max depth {}, {} seed{})",
                metadata.max_depth(),
                seeds,
                if seeds == 1 { "" } else { "s" }
            ))
        )?;
        writeln!(
            out,
            "{}",
            self.dimmed(&format!(
                "Generated by {} {} at {}",
                metadata.tool_name(),
                metadata.tool_version(),
                metadata.generated_at().to_rfc3339()
            ))
        )?;
        writeln!(out)?;

        writeln!(out, "{}", self.heading("Forward dependencies:"))?;
        if graph.forward().is_empty() {
            writeln!(out, "  {}", self.dimmed("(none)"))?;
        }
        for (package, dependencies) in graph.forward() {
            if graph.is_unresolved(package.as_str()) {
                let note = self.paint("(metadata unavailable)", Style::new().yellow());
                writeln!(out, "  {} {}", package, note)?;
            } else if dependencies.is_empty() {
                writeln!(out, "  {} {}", package, self.dimmed("(no dependencies)"))?;
            } else {
                writeln!(out, "  {} -> {}", package, Self::join(dependencies))?;
            }
        }
        writeln!(out)?;

        writeln!(out, "{}", self.heading("Reverse dependencies:"))?;
        if graph.reverse().is_empty() {
            writeln!(out, "  {}", self.dimmed("(none)"))?;
        }
        for (package, dependents) in graph.reverse().iter() {
            writeln!(out, "  {} <- {}", package, Self::join(dependents))?;
        }

        let not_expanded: Vec<&PackageId> = graph
            .nodes()
            .into_iter()
            .filter(|p| !graph.is_expanded(p.as_str()))
            .collect();
        if !not_expanded.is_empty() {
            writeln!(out)?;
            writeln!(
                out,
                "{} {}",
                self.heading("Not expanded (depth limit):"),
                not_expanded
                    .iter()
                    .map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )?;
        }

        let query = GraphQueryService::new(graph);
        let roots = query.roots();
        if !roots.is_empty() {
            writeln!(out)?;
            writeln!(
                out,
                "{} {}",
                self.heading("Roots:"),
                roots.iter().map(|p| p.as_str()).collect::<Vec<_>>().join(", ")
            )?;
        }
        let top = query.most_depended_upon(MOST_DEPENDED_UPON_LIMIT);
        if !top.is_empty() {
            writeln!(
                out,
                "{} {}",
                self.heading("Most depended upon:"),
                top.iter()
                    .map(|(p, n)| format!("{} ({})", p, n))
                    .collect::<Vec<_>>()
                    .join(", ")
            )?;
        }

        let summary = query.summary();
        writeln!(out)?;
        writeln!(
            out,
            "Summary: {} packages, {} edges, {} expanded, {} unresolved",
            summary.node_count, summary.edge_count, summary.expanded_count, summary.unresolved_count
        )
    }

    fn render_package(&self, out: &mut String, info: &PackageInfo) -> std::fmt::Result {
        writeln!(out, "{} {}", self.heading("Package:"), info.package)?;
        let state = info.state.to_string();
        let state = match info.state {
            ExpansionState::Expanded => self.paint(&state, Style::new().green()),
            ExpansionState::NotExpanded | ExpansionState::MetadataUnavailable => {
                self.paint(&state, Style::new().yellow())
            }
            ExpansionState::Unknown => self.paint(&state, Style::new().red()),
        };
        writeln!(out, "{} {}", self.heading("State:"), state)?;
        self.render_list(out, "Direct dependencies", &info.direct_dependencies)?;
        self.render_list(out, "Dependents", &info.dependents)
    }

    fn render_comparison(&self, out: &mut String, result: &ComparisonResult) -> std::fmt::Result {
        let (a, b) = (result.label_a(), result.label_b());
        writeln!(out, "{}", self.heading(&format!("Comparison: {} vs {}", a, b)))?;
        writeln!(out)?;
        self.render_set_counts(out, "Nodes", result.nodes(), result)?;
        self.render_set_counts(out, "Edges", result.edges(), result)?;

        for (label, nodes) in [(a, result.nodes().only_in_a()), (b, result.nodes().only_in_b())] {
            if nodes.is_empty() {
                continue;
            }
            writeln!(out)?;
            writeln!(out, "{}", self.heading(&format!("Packages only in {}:", label)))?;
            for node in nodes {
                writeln!(out, "  - {}", node)?;
            }
        }

        for (label, edges) in [(a, result.edges().only_in_a()), (b, result.edges().only_in_b())] {
            if edges.is_empty() {
                continue;
            }
            writeln!(out)?;
            writeln!(out, "{}", self.heading(&format!("Edges only in {}:", label)))?;
            for (source, target) in edges {
                writeln!(out, "  - {} -> {}", source, target)?;
            }
        }

        writeln!(out)?;
        writeln!(out, "{}", self.heading("Explanation:"))?;
        for reason in result.explain() {
            writeln!(out, "  • {}", reason)?;
        }
        Ok(())
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::plain()
    }
}

impl ReportFormatter for TextFormatter {
    fn format_graph(&self, graph: &DependencyGraph, metadata: &AnalysisMetadata) -> Result<String> {
        let mut out = String::new();
        self.render_graph(&mut out, graph, metadata)?;
        Ok(out)
    }

    fn format_package(&self, info: &PackageInfo) -> Result<String> {
        let mut out = String::new();
        self.render_package(&mut out, info)?;
        Ok(out)
    }

    fn format_comparison(&self, result: &ComparisonResult) -> Result<String> {
        let mut out = String::new();
        self.render_comparison(&mut out, result)?;
        Ok(out)
    }
}
