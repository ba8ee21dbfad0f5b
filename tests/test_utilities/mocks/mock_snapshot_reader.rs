use deb_rdeps::prelude::*;
use std::collections::HashMap;

/// Mock reader serving `Sources` and `Packages` indexes from memory
///
/// Indexes are keyed by (distribution, component); anything not registered
/// is reported as a missing snapshot file, like the filesystem reader does.
#[derive(Default, Clone)]
pub struct MockSnapshotReader {
    sources: HashMap<(String, String), String>,
    packages: HashMap<(String, String), String>,
}

impl MockSnapshotReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sources(mut self, distribution: &str, component: &str, content: &str) -> Self {
        self.sources.insert(
            (distribution.to_string(), component.to_string()),
            content.to_string(),
        );
        self
    }

    pub fn with_packages(mut self, distribution: &str, component: &str, content: &str) -> Self {
        self.packages.insert(
            (distribution.to_string(), component.to_string()),
            content.to_string(),
        );
        self
    }

    fn lookup(
        map: &HashMap<(String, String), String>,
        snapshot: &Snapshot,
        component: &str,
        suffix: &str,
    ) -> Result<IndexText> {
        let origin = format!("mock_{}_{}_{}", snapshot.distribution, component, suffix);
        match map.get(&(snapshot.distribution.clone(), component.to_string())) {
            Some(content) => Ok(IndexText::new(origin, content.clone())),
            None => Err(RdepsError::MissingSnapshotFile {
                path: origin.into(),
                distribution: snapshot.distribution.clone(),
                component: component.to_string(),
            }
            .into()),
        }
    }
}

impl SourceIndexReader for MockSnapshotReader {
    fn read_source_index(&self, snapshot: &Snapshot, component: &str) -> Result<IndexText> {
        Self::lookup(&self.sources, snapshot, component, "Sources")
    }
}

impl BinaryIndexReader for MockSnapshotReader {
    fn read_binary_index(&self, snapshot: &Snapshot, component: &str) -> Result<IndexText> {
        Self::lookup(&self.packages, snapshot, component, "Packages")
    }
}
