use super::relation_kind::{BuildRelationKind, RelationKind};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Visual classification of a dependent package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeClass {
    /// Still blocking: present in the archive and in the reference suite
    Active,
    /// Already gone from the reference suite
    RemovedFromReference,
    /// Built from the same source as the target
    SameSource,
    Metapackage,
    /// Lives in contrib or non-free
    RestrictedComponent,
}

impl NodeClass {
    /// Graphviz color name used when rendering.
    pub fn color(&self) -> &'static str {
        match self {
            NodeClass::Active => "red",
            NodeClass::RemovedFromReference => "green",
            NodeClass::SameSource => "orange",
            NodeClass::Metapackage => "turquoise",
            NodeClass::RestrictedComponent => "yellow4",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeClass::Active => "active",
            NodeClass::RemovedFromReference => "removed-from-reference",
            NodeClass::SameSource => "same-source",
            NodeClass::Metapackage => "metapackage",
            NodeClass::RestrictedComponent => "restricted-component",
        }
    }
}

/// Which relation produced an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    Runtime(RelationKind),
    Build(BuildRelationKind),
}

impl EdgeKind {
    pub fn is_runtime(&self) -> bool {
        matches!(self, EdgeKind::Runtime(_))
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::Runtime(kind) => write!(f, "{}", kind),
            EdgeKind::Build(kind) => write!(f, "{}", kind),
        }
    }
}

/// Relation tag plus the traversal level the edge was found at,
/// rendered as `Depends (lvl=1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeLabel {
    pub kind: EdgeKind,
    pub level: u32,
}

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (lvl={})", self.kind, self.level)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    class: Option<NodeClass>,
}

impl Node {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> Option<NodeClass> {
        self.class
    }
}

/// `source -> destination` means "source depends on destination".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    source: String,
    destination: String,
    label: EdgeLabel,
    class: Option<NodeClass>,
}

impl Edge {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn label(&self) -> EdgeLabel {
        self.label
    }

    pub fn class(&self) -> Option<NodeClass> {
        self.class
    }
}

/// Directed multigraph of reverse dependencies around one target package.
///
/// Nodes are unique by name and kept in discovery order; edges keep
/// duplicates, so the same pair may be linked by several labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyGraph {
    root: String,
    nodes: Vec<Node>,
    positions: HashMap<String, usize>,
    edges: Vec<Edge>,
}

impl DependencyGraph {
    pub fn new(root: &str) -> Self {
        let mut graph = Self {
            root: root.to_string(),
            nodes: Vec::new(),
            positions: HashMap::new(),
            edges: Vec::new(),
        };
        graph.add_node(root, None);
        graph
    }

    /// Adds `name` if absent. A classification, when given, replaces the
    /// node's previous one.
    pub fn add_node(&mut self, name: &str, class: Option<NodeClass>) {
        match self.positions.get(name) {
            Some(&position) => {
                if class.is_some() {
                    self.nodes[position].class = class;
                }
            }
            None => {
                self.positions.insert(name.to_string(), self.nodes.len());
                self.nodes.push(Node {
                    name: name.to_string(),
                    class,
                });
            }
        }
    }

    /// Adds an edge; both endpoints must already be nodes.
    pub fn add_edge(
        &mut self,
        source: &str,
        destination: &str,
        label: EdgeLabel,
        class: Option<NodeClass>,
    ) {
        debug_assert!(self.contains_node(source) && self.contains_node(destination));
        self.edges.push(Edge {
            source: source.to_string(),
            destination: destination.to_string(),
            label,
            class,
        });
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, name: &str) -> Option<&Node> {
        self.positions.get(name).map(|&position| &self.nodes[position])
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Every edge, duplicates included ("how many paths").
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges counted once per `(source, destination)` pair
    /// ("how many distinct reverse dependencies").
    pub fn distinct_edge_count(&self) -> usize {
        self.edges
            .iter()
            .map(|edge| (edge.source(), edge.destination()))
            .collect::<HashSet<_>>()
            .len()
    }

    /// Edges pointing at `name`.
    pub fn edges_into<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |edge| edge.destination == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depends(level: u32) -> EdgeLabel {
        EdgeLabel {
            kind: EdgeKind::Runtime(RelationKind::Depends),
            level,
        }
    }

    #[test]
    fn test_new_graph_contains_root() {
        let graph = DependencyGraph::new("libbar1");
        assert_eq!(graph.root(), "libbar1");
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.node("libbar1").unwrap().class().is_none());
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph = DependencyGraph::new("a");
        graph.add_node("b", None);
        graph.add_node("b", None);
        assert_eq!(graph.node_count(), 2);
        let names: Vec<&str> = graph.nodes().iter().map(Node::name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_add_node_class_overrides_but_none_keeps() {
        let mut graph = DependencyGraph::new("a");
        graph.add_node("b", Some(NodeClass::Active));
        graph.add_node("b", None);
        assert_eq!(graph.node("b").unwrap().class(), Some(NodeClass::Active));
        graph.add_node("b", Some(NodeClass::SameSource));
        assert_eq!(graph.node("b").unwrap().class(), Some(NodeClass::SameSource));
    }

    #[test]
    fn test_multi_edges_and_distinct_count() {
        let mut graph = DependencyGraph::new("a");
        graph.add_node("b", None);
        graph.add_edge("b", "a", depends(1), None);
        graph.add_edge("b", "a", depends(1), None);
        graph.add_edge(
            "b",
            "a",
            EdgeLabel {
                kind: EdgeKind::Build(BuildRelationKind::BuildDepends),
                level: 1,
            },
            None,
        );

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.distinct_edge_count(), 1);
        assert_eq!(graph.edges_into("a").count(), 3);
        assert_eq!(graph.edges_into("b").count(), 0);
    }

    #[test]
    fn test_edge_label_display() {
        assert_eq!(depends(2).to_string(), "Depends (lvl=2)");
        let label = EdgeLabel {
            kind: EdgeKind::Build(BuildRelationKind::BuildDependsIndep),
            level: 1,
        };
        assert_eq!(label.to_string(), "Build-Depends-Indep (lvl=1)");
        assert!(!label.kind.is_runtime());
    }

    #[test]
    fn test_node_class_colors() {
        assert_eq!(NodeClass::Active.color(), "red");
        assert_eq!(NodeClass::RemovedFromReference.color(), "green");
        assert_eq!(NodeClass::SameSource.color(), "orange");
        assert_eq!(NodeClass::Metapackage.color(), "turquoise");
        assert_eq!(NodeClass::RestrictedComponent.color(), "yellow4");
    }
}
