use crate::archive::domain::Snapshot;
use crate::ports::outbound::{BinaryIndexReader, IndexText, SourceIndexReader};
use crate::shared::error::RdepsError;
use crate::shared::security::validate_index_file;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_LISTS_DIR: &str = "/var/lib/apt/lists";
pub const DEFAULT_MIRROR: &str = "ftp.debian.org_debian";

/// FileSystemReader adapter for apt list files
///
/// Resolves index files the way apt names them under its lists directory:
/// `{mirror}_dists_{distribution}_{component}_source_Sources` and
/// `{mirror}_dists_{distribution}_{component}_binary-{arch}_Packages`.
pub struct FileSystemReader {
    lists_dir: PathBuf,
    mirror: String,
}

impl FileSystemReader {
    pub fn new(lists_dir: impl Into<PathBuf>, mirror: &str) -> Self {
        Self {
            lists_dir: lists_dir.into(),
            mirror: mirror.to_string(),
        }
    }

    pub fn lists_dir(&self) -> &Path {
        &self.lists_dir
    }

    pub fn source_index_path(&self, snapshot: &Snapshot, component: &str) -> PathBuf {
        self.lists_dir.join(format!(
            "{}_dists_{}_{}_source_Sources",
            self.mirror, snapshot.distribution, component
        ))
    }

    pub fn binary_index_path(&self, snapshot: &Snapshot, component: &str) -> PathBuf {
        self.lists_dir.join(format!(
            "{}_dists_{}_{}_binary-{}_Packages",
            self.mirror, snapshot.distribution, component, snapshot.architecture
        ))
    }

    fn read_index(&self, path: PathBuf, snapshot: &Snapshot, component: &str) -> Result<IndexText> {
        if !path.exists() {
            return Err(RdepsError::MissingSnapshotFile {
                path,
                distribution: snapshot.distribution.clone(),
                component: component.to_string(),
            }
            .into());
        }

        validate_index_file(&path).map_err(|e| RdepsError::FileReadError {
            path: path.clone(),
            details: e.to_string(),
        })?;

        let content = fs::read_to_string(&path).map_err(|e| RdepsError::FileReadError {
            path: path.clone(),
            details: e.to_string(),
        })?;
        Ok(IndexText::new(path, content))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new(DEFAULT_LISTS_DIR, DEFAULT_MIRROR)
    }
}

impl SourceIndexReader for FileSystemReader {
    fn read_source_index(&self, snapshot: &Snapshot, component: &str) -> Result<IndexText> {
        self.read_index(self.source_index_path(snapshot, component), snapshot, component)
    }
}

impl BinaryIndexReader for FileSystemReader {
    fn read_binary_index(&self, snapshot: &Snapshot, component: &str) -> Result<IndexText> {
        self.read_index(self.binary_index_path(snapshot, component), snapshot, component)
    }
}
