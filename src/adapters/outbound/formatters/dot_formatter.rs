use crate::archive::domain::DependencyGraph;
use crate::archive::services::GraphDecorations;
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// DotFormatter adapter for Graphviz `digraph` output
///
/// Edges point from the dependent to the package it depends on and the
/// graph is laid out right to left, so the target ends up on the right.
/// Classified nodes carry their class color; decorated nodes an `URL`.
pub struct DotFormatter;

impl DotFormatter {
    pub fn new() -> Self {
        Self
    }

    fn quote(id: &str) -> String {
        format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
    }

    fn attributes(attrs: &[(&str, String)]) -> String {
        if attrs.is_empty() {
            return String::new();
        }
        let joined = attrs
            .iter()
            .map(|(key, value)| format!("{}={}", key, Self::quote(value)))
            .collect::<Vec<_>>()
            .join(", ");
        format!(" [{}]", joined)
    }
}

impl Default for DotFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for DotFormatter {
    fn format(&self, graph: &DependencyGraph, decorations: Option<&GraphDecorations>) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "digraph {} {{", Self::quote(graph.root()))?;
        writeln!(out, "rankdir=RL;")?;

        for node in graph.nodes() {
            let mut attrs = Vec::new();
            if let Some(class) = node.class() {
                attrs.push(("color", class.color().to_string()));
            }
            if let Some(url) = decorations.and_then(|d| d.url(node.name())) {
                attrs.push(("URL", url.to_string()));
            }
            writeln!(out, "{}{};", Self::quote(node.name()), Self::attributes(&attrs))?;
        }

        for edge in graph.edges() {
            let attrs = [("label", edge.label().to_string())];
            writeln!(
                out,
                "{} -> {}{};",
                Self::quote(edge.source()),
                Self::quote(edge.destination()),
                Self::attributes(&attrs)
            )?;
        }

        writeln!(out, "}}")?;
        Ok(out)
    }

    fn file_extension(&self) -> &'static str {
        "dot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::domain::{BuildRelationKind, EdgeKind, EdgeLabel, NodeClass, RelationKind};
    use crate::archive::services::GraphDecorator;
    use std::collections::HashSet;

    fn graph() -> DependencyGraph {
        let mut graph = DependencyGraph::new("libbar1");
        graph.add_node("app1", Some(NodeClass::Active));
        graph.add_edge(
            "app1",
            "libbar1",
            EdgeLabel {
                kind: EdgeKind::Runtime(RelationKind::Depends),
                level: 1,
            },
            Some(NodeClass::Active),
        );
        graph.add_node("app2", Some(NodeClass::RestrictedComponent));
        graph.add_edge(
            "app2",
            "libbar1",
            EdgeLabel {
                kind: EdgeKind::Build(BuildRelationKind::BuildDepends),
                level: 1,
            },
            None,
        );
        graph
    }

    #[test]
    fn test_dot_output() {
        let dot = DotFormatter::new().format(&graph(), None).unwrap();
        let expected = "\
digraph \"libbar1\" {
rankdir=RL;
\"libbar1\";
\"app1\" [color=\"red\"];
\"app2\" [color=\"yellow4\"];
\"app1\" -> \"libbar1\" [label=\"Depends (lvl=1)\"];
\"app2\" -> \"libbar1\" [label=\"Build-Depends (lvl=1)\"];
}
";
        assert_eq!(dot, expected);
    }

    #[test]
    fn test_dot_output_with_urls() {
        let membership: HashSet<String> = ["app1".to_string()].into();
        let decorations = GraphDecorator::default().decorate(&graph(), &membership, "unstable");
        let dot = DotFormatter::new().format(&graph(), Some(&decorations)).unwrap();
        assert!(dot.contains(
            "\"app1\" [color=\"red\", URL=\"https://packages.debian.org/unstable/app1\"];"
        ));
    }

    #[test]
    fn test_quotes_are_escaped() {
        assert_eq!(DotFormatter::quote("a\"b"), "\"a\\\"b\"");
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(DotFormatter::new().file_extension(), "dot");
    }
}
