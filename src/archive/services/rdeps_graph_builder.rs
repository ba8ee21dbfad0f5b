use crate::archive::domain::{ArchiveIndex, DependencyGraph, EdgeKind, EdgeLabel, NodeClass};
use crate::archive::policies::{Candidate, NodeClassifier};
use crate::ports::outbound::{BinaryPackageCache, PackageLookup};
use std::collections::HashSet;

/// Outcome of one traversal: the graph plus what the traversal noticed on
/// the way.
#[derive(Debug, Clone)]
pub struct Traversal {
    pub graph: DependencyGraph,
    /// Names expanded, in expansion order
    pub expanded: Vec<String>,
    /// Names in the archive index the binary cache knows nothing about
    pub unresolved: Vec<String>,
}

/// RdepsGraphBuilder service: bounded-depth reverse-dependency expansion.
///
/// The frontier is a LIFO stack of `(name, level)` seeded with
/// `(target, 1)`. A popped name always becomes a node, but is only expanded
/// when it is a latest binary, has not been expanded before and its level
/// does not exceed `max_level`.
///
/// Runtime reverse dependencies (`Depends`, `Recommends`) found in the
/// binary cache become edges and are pushed at `level + 1`. Build and
/// test-trigger reverse dependencies from the four reverse indexes become
/// edges too but are never pushed.
///
/// The builder only borrows the index and the cache, so any number of
/// builders can run over the same snapshot in parallel.
pub struct RdepsGraphBuilder<'a, C: BinaryPackageCache + ?Sized> {
    index: &'a ArchiveIndex,
    cache: &'a C,
    classifier: Option<&'a NodeClassifier<'a>>,
}

impl<'a, C: BinaryPackageCache + ?Sized> RdepsGraphBuilder<'a, C> {
    pub fn new(index: &'a ArchiveIndex, cache: &'a C) -> Self {
        Self {
            index,
            cache,
            classifier: None,
        }
    }

    /// Colors every discovered dependent with `classifier`.
    pub fn with_classifier(mut self, classifier: &'a NodeClassifier<'a>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn generate(&self, target: &str, max_level: u32) -> DependencyGraph {
        self.traverse(target, max_level).graph
    }

    pub fn traverse(&self, target: &str, max_level: u32) -> Traversal {
        let mut graph = DependencyGraph::new(target);
        let mut visited: HashSet<String> = HashSet::new();
        let mut expanded = Vec::new();
        let mut unresolved = Vec::new();
        let mut frontier: Vec<(String, u32)> = vec![(target.to_string(), 1)];

        while let Some((name, level)) = frontier.pop() {
            graph.add_node(&name, None);

            if !self.index.is_latest_binary(&name) || visited.contains(&name) || level > max_level {
                continue;
            }
            visited.insert(name.clone());
            expanded.push(name.clone());

            // unknown to the cache: a leaf, build and test indexes included
            if matches!(self.cache.lookup(&name), PackageLookup::Unknown) {
                unresolved.push(name.clone());
                continue;
            }

            for rdep in self.cache.reverse_dependencies(&name) {
                if !rdep.kind.is_tracked() || !self.index.is_latest_binary(&rdep.dependent) {
                    continue;
                }
                let class = self.classify(&name, Candidate::Binary(&rdep.dependent));
                let label = EdgeLabel {
                    kind: EdgeKind::Runtime(rdep.kind),
                    level,
                };
                graph.add_node(&rdep.dependent, class);
                graph.add_edge(&rdep.dependent, &name, label, class);
                frontier.push((rdep.dependent.clone(), level + 1));
            }

            for reverse_index in self.index.reverse_indexes() {
                let label = EdgeLabel {
                    kind: EdgeKind::Build(reverse_index.kind()),
                    level,
                };
                for source in reverse_index.dependents(&name) {
                    let class = self.classify(&name, Candidate::Source(source));
                    graph.add_node(source, class);
                    graph.add_edge(source, &name, label, class);
                }
            }
        }

        Traversal {
            graph,
            expanded,
            unresolved,
        }
    }

    fn classify(&self, expanded: &str, candidate: Candidate<'_>) -> Option<NodeClass> {
        self.classifier
            .map(|classifier| classifier.classify(expanded, candidate))
    }
}
