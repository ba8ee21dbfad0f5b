use crate::archive::domain::Snapshot;
use crate::shared::Result;
use std::path::PathBuf;

/// Raw content of one apt index file, with where it came from.
#[derive(Debug, Clone)]
pub struct IndexText {
    pub origin: PathBuf,
    pub content: String,
}

impl IndexText {
    pub fn new(origin: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            content: content.into(),
        }
    }
}

/// SourceIndexReader port for reading `Sources` indexes
///
/// One index exists per (distribution, component) pair.
pub trait SourceIndexReader {
    /// Reads the `Sources` index of `component` in `snapshot`
    ///
    /// # Errors
    /// Returns `RdepsError::MissingSnapshotFile` if the index does not exist,
    /// or an I/O error if it cannot be read.
    fn read_source_index(&self, snapshot: &Snapshot, component: &str) -> Result<IndexText>;
}

/// BinaryIndexReader port for reading `Packages` indexes
///
/// One index exists per (distribution, component, architecture) triple.
pub trait BinaryIndexReader {
    /// Reads the `Packages` index of `component` for the snapshot's architecture
    ///
    /// # Errors
    /// Returns `RdepsError::MissingSnapshotFile` if the index does not exist.
    fn read_binary_index(&self, snapshot: &Snapshot, component: &str) -> Result<IndexText>;
}
