use crate::archive::domain::Snapshot;

pub const DEFAULT_LEVEL: u32 = 2;

/// RdepsRequest - request DTO for reverse-dependency graph generation
#[derive(Debug, Clone)]
pub struct RdepsRequest {
    /// Binary package names, one graph each
    pub targets: Vec<String>,
    pub snapshot: Snapshot,
    /// Distribution compared against when classifying nodes (usually testing)
    pub reference_distribution: Option<String>,
    pub level: u32,
    /// Maximum number of traversals running at once
    pub jobs: usize,
    /// When set, latest binaries in each graph are linked with this template
    pub package_url_template: Option<String>,
}

impl RdepsRequest {
    pub fn new(targets: Vec<String>, snapshot: Snapshot) -> Self {
        Self {
            targets,
            snapshot,
            reference_distribution: None,
            level: DEFAULT_LEVEL,
            jobs: 1,
            package_url_template: None,
        }
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_reference(mut self, distribution: Option<String>) -> Self {
        self.reference_distribution = distribution;
        self
    }

    /// `jobs` is clamped to at least one worker.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    pub fn with_package_urls(mut self, template: Option<String>) -> Self {
        self.package_url_template = template;
        self
    }
}
