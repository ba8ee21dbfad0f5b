use crate::archive::domain::DependencyGraph;
use crate::archive::services::GraphDecorations;
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// TextFormatter adapter: one `<destination> <- <source>  (<label>)` line
/// per edge after a header with the raw edge count.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for TextFormatter {
    fn format(&self, graph: &DependencyGraph, _decorations: Option<&GraphDecorations>) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "Total remaining reverse dependencies: {}", graph.edge_count())?;
        for edge in graph.edges() {
            writeln!(
                out,
                "{} <- {}  ({})",
                edge.destination(),
                edge.source(),
                edge.label()
            )?;
        }
        Ok(out)
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::domain::{EdgeKind, EdgeLabel, RelationKind};

    #[test]
    fn test_text_dump() {
        let mut graph = DependencyGraph::new("libbar1");
        graph.add_node("app1", None);
        let label = |kind, level| EdgeLabel {
            kind: EdgeKind::Runtime(kind),
            level,
        };
        graph.add_edge("app1", "libbar1", label(RelationKind::Depends, 1), None);
        graph.add_edge("app1", "libbar1", label(RelationKind::Recommends, 1), None);

        let text = TextFormatter::new().format(&graph, None).unwrap();
        assert_eq!(
            text,
            "Total remaining reverse dependencies: 2\n\
             libbar1 <- app1  (Depends (lvl=1))\n\
             libbar1 <- app1  (Recommends (lvl=1))\n"
        );
    }

    #[test]
    fn test_empty_graph() {
        let text = TextFormatter::new()
            .format(&DependencyGraph::new("lonely"), None)
            .unwrap();
        assert_eq!(text, "Total remaining reverse dependencies: 0\n");
    }
}
