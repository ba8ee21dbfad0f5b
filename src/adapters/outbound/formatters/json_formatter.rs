use crate::archive::domain::DependencyGraph;
use crate::archive::services::GraphDecorations;
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct GraphDocument<'a> {
    root: &'a str,
    nodes: Vec<NodeEntry<'a>>,
    edges: Vec<EdgeEntry<'a>>,
    edge_count: usize,
    distinct_edge_count: usize,
}

#[derive(Debug, Serialize)]
struct NodeEntry<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    class: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct EdgeEntry<'a> {
    source: &'a str,
    destination: &'a str,
    relation: String,
    runtime: bool,
    level: u32,
    label: String,
}

/// JsonFormatter adapter for machine-readable graph output
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for JsonFormatter {
    fn format(&self, graph: &DependencyGraph, decorations: Option<&GraphDecorations>) -> Result<String> {
        let document = GraphDocument {
            root: graph.root(),
            nodes: graph
                .nodes()
                .iter()
                .map(|node| NodeEntry {
                    name: node.name(),
                    class: node.class().map(|c| c.as_str()),
                    color: node.class().map(|c| c.color()),
                    url: decorations.and_then(|d| d.url(node.name())),
                })
                .collect(),
            edges: graph
                .edges()
                .iter()
                .map(|edge| {
                    let label = edge.label();
                    EdgeEntry {
                        source: edge.source(),
                        destination: edge.destination(),
                        relation: label.kind.to_string(),
                        runtime: label.kind.is_runtime(),
                        level: label.level,
                        label: label.to_string(),
                    }
                })
                .collect(),
            edge_count: graph.edge_count(),
            distinct_edge_count: graph.distinct_edge_count(),
        };

        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::domain::{BuildRelationKind, EdgeKind, EdgeLabel, NodeClass};

    #[test]
    fn test_json_document() {
        let mut graph = DependencyGraph::new("python2.7");
        graph.add_node("src-pkg", Some(NodeClass::RemovedFromReference));
        graph.add_edge(
            "src-pkg",
            "python2.7",
            EdgeLabel {
                kind: EdgeKind::Build(BuildRelationKind::TestsuiteTriggers),
                level: 1,
            },
            None,
        );

        let json = JsonFormatter::new().format(&graph, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["root"], "python2.7");
        assert_eq!(value["nodes"].as_array().unwrap().len(), 2);
        assert!(value["nodes"][0].get("class").is_none());
        assert_eq!(value["nodes"][1]["class"], "removed-from-reference");
        assert_eq!(value["nodes"][1]["color"], "green");
        assert_eq!(value["edges"][0]["relation"], "Testsuite-Triggers");
        assert_eq!(value["edges"][0]["runtime"], false);
        assert_eq!(value["edges"][0]["label"], "Testsuite-Triggers (lvl=1)");
        assert_eq!(value["edge_count"], 1);
        assert_eq!(value["distinct_edge_count"], 1);
    }
}
