/// Identifies the apt index files of one distribution snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub distribution: String,
    pub components: Vec<String>,
    pub architecture: String,
}

impl Snapshot {
    pub fn new(distribution: &str, components: &[String], architecture: &str) -> Self {
        Self {
            distribution: distribution.to_string(),
            components: components.to_vec(),
            architecture: architecture.to_string(),
        }
    }

    /// Same components and architecture, another distribution.
    pub fn with_distribution(&self, distribution: &str) -> Self {
        Self {
            distribution: distribution.to_string(),
            ..self.clone()
        }
    }
}
