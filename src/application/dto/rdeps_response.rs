use crate::archive::domain::DependencyGraph;
use crate::archive::services::GraphDecorations;

/// One finished traversal
#[derive(Debug, Clone)]
pub struct TargetGraph {
    pub target: String,
    pub graph: DependencyGraph,
    pub decorations: Option<GraphDecorations>,
    /// Expanded names the binary cache did not know
    pub unresolved: Vec<String>,
}

/// A target that produced no graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFailure {
    pub target: String,
    pub reason: String,
}

/// RdepsResponse - graphs in request order plus failed targets
#[derive(Debug, Clone, Default)]
pub struct RdepsResponse {
    pub graphs: Vec<TargetGraph>,
    pub failures: Vec<TargetFailure>,
}

impl RdepsResponse {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
