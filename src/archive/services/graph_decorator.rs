use crate::archive::domain::DependencyGraph;
use std::collections::{BTreeMap, HashSet};

pub const DEFAULT_PACKAGE_URL_TEMPLATE: &str = "https://packages.debian.org/{distribution}/{package}";

/// Per-node annotations computed after traversal; the graph itself is
/// never touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphDecorations {
    urls: BTreeMap<String, String>,
}

impl GraphDecorations {
    pub fn url(&self, node: &str) -> Option<&str> {
        self.urls.get(node).map(String::as_str)
    }

    pub fn urls(&self) -> &BTreeMap<String, String> {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

/// GraphDecorator service: links every node that belongs to `membership`
/// to its package page.
///
/// `{package}` and `{distribution}` in the template are replaced with the
/// URL-encoded node name and distribution.
pub struct GraphDecorator {
    template: String,
}

impl GraphDecorator {
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    pub fn decorate(
        &self,
        graph: &DependencyGraph,
        membership: &HashSet<String>,
        distribution: &str,
    ) -> GraphDecorations {
        let urls = graph
            .nodes()
            .iter()
            .filter(|node| membership.contains(node.name()))
            .map(|node| (node.name().to_string(), self.url_for(node.name(), distribution)))
            .collect();
        GraphDecorations { urls }
    }

    fn url_for(&self, package: &str, distribution: &str) -> String {
        self.template
            .replace("{distribution}", &urlencoding::encode(distribution))
            .replace("{package}", &urlencoding::encode(package))
    }
}

impl Default for GraphDecorator {
    fn default() -> Self {
        Self::new(DEFAULT_PACKAGE_URL_TEMPLATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::domain::{EdgeKind, EdgeLabel, RelationKind};

    fn graph() -> DependencyGraph {
        let mut graph = DependencyGraph::new("libbar1");
        graph.add_node("app1", None);
        graph.add_node("libstdc++6", None);
        graph.add_edge(
            "app1",
            "libbar1",
            EdgeLabel {
                kind: EdgeKind::Runtime(RelationKind::Depends),
                level: 1,
            },
            None,
        );
        graph
    }

    #[test]
    fn test_only_members_are_decorated() {
        let membership: HashSet<String> = ["app1".to_string(), "elsewhere".to_string()].into();
        let decorations = GraphDecorator::default().decorate(&graph(), &membership, "unstable");

        assert_eq!(decorations.len(), 1);
        assert_eq!(
            decorations.url("app1"),
            Some("https://packages.debian.org/unstable/app1")
        );
        assert_eq!(decorations.url("libbar1"), None);
    }

    #[test]
    fn test_names_are_url_encoded() {
        let membership: HashSet<String> = ["libstdc++6".to_string()].into();
        let decorations =
            GraphDecorator::new("https://example.org/{package}?d={distribution}").decorate(&graph(), &membership, "sid");

        assert_eq!(
            decorations.url("libstdc++6"),
            Some("https://example.org/libstdc%2B%2B6?d=sid")
        );
    }

    #[test]
    fn test_decoration_leaves_graph_untouched() {
        let graph = graph();
        let before = graph.clone();
        let membership: HashSet<String> = ["app1".to_string()].into();
        let _ = GraphDecorator::default().decorate(&graph, &membership, "unstable");
        assert_eq!(graph, before);
    }

    #[test]
    fn test_empty_membership() {
        let decorations = GraphDecorator::default().decorate(&graph(), &HashSet::new(), "unstable");
        assert!(decorations.is_empty());
    }
}
