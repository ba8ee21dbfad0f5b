use crate::archive::domain::Snapshot;
use crate::archive::policies::ObsoleteDependencyPolicy;

pub const DEFAULT_REPORT_LEVEL: u32 = 1;

/// MigrationRequest - request DTO for the migration assessment
#[derive(Debug, Clone)]
pub struct MigrationRequest {
    /// Source package names to assess
    pub sources: Vec<String>,
    pub snapshot: Snapshot,
    pub level: u32,
    /// Whether graphs are wanted; rows then reference `<binary>.dot`
    pub write_graphs: bool,
    pub policy: ObsoleteDependencyPolicy,
}

impl MigrationRequest {
    pub fn new(sources: Vec<String>, snapshot: Snapshot) -> Self {
        Self {
            sources,
            snapshot,
            level: DEFAULT_REPORT_LEVEL,
            write_graphs: false,
            policy: ObsoleteDependencyPolicy::default(),
        }
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_graphs(mut self, write_graphs: bool) -> Self {
        self.write_graphs = write_graphs;
        self
    }

    pub fn with_policy(mut self, policy: ObsoleteDependencyPolicy) -> Self {
        self.policy = policy;
        self
    }
}
