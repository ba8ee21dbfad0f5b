use super::relation_kind::BuildRelationKind;
use super::source_package::SourcePackageRecord;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Maps a package name to the source packages whose relation field of one
/// kind names it first in a clause.
///
/// Buckets list sources in source-name order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseIndexMap {
    kind: BuildRelationKind,
    entries: HashMap<String, Vec<String>>,
}

impl ReverseIndexMap {
    pub fn new(kind: BuildRelationKind) -> Self {
        Self {
            kind,
            entries: HashMap::new(),
        }
    }

    pub fn kind(&self) -> BuildRelationKind {
        self.kind
    }

    pub fn insert(&mut self, dependency: &str, source: &str) {
        self.entries
            .entry(dependency.to_string())
            .or_default()
            .push(source.to_string());
    }

    /// Sources depending on `name`; empty when nothing does.
    pub fn dependents(&self, name: &str) -> &[String] {
        self.entries.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A binary listed in the `Binary` field of two different sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryConflict {
    pub binary: String,
    pub kept_source: String,
    pub other_source: String,
}

/// Canonical view of one distribution: the latest record of every source
/// package plus the tables derived from it.
///
/// Built once per snapshot and never mutated afterwards, so it can be shared
/// between traversal workers behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveIndex {
    distribution: String,
    sources: BTreeMap<String, SourcePackageRecord>,
    latest_binaries: HashSet<String>,
    reverse_indexes: Vec<ReverseIndexMap>,
    binary_sources: HashMap<String, String>,
    binary_conflicts: Vec<BinaryConflict>,
}

impl ArchiveIndex {
    /// Derives the binary set and the reverse indexes from a source table
    /// that already holds exactly one record per source name.
    pub fn from_sources(distribution: &str, sources: BTreeMap<String, SourcePackageRecord>) -> Self {
        let mut latest_binaries = HashSet::new();
        let mut binary_sources: HashMap<String, String> = HashMap::new();
        let mut binary_conflicts = Vec::new();
        let mut reverse_indexes: Vec<ReverseIndexMap> = BuildRelationKind::ALL
            .iter()
            .map(|kind| ReverseIndexMap::new(*kind))
            .collect();

        for (name, record) in &sources {
            for binary in record.binaries() {
                latest_binaries.insert(binary.clone());
                match binary_sources.get(binary) {
                    Some(kept) if kept != name => binary_conflicts.push(BinaryConflict {
                        binary: binary.clone(),
                        kept_source: kept.clone(),
                        other_source: name.clone(),
                    }),
                    Some(_) => {}
                    None => {
                        binary_sources.insert(binary.clone(), name.clone());
                    }
                }
            }

            for index in reverse_indexes.iter_mut() {
                for dependency in record.relation(index.kind()).first_names() {
                    index.insert(dependency, name);
                }
            }
        }

        Self {
            distribution: distribution.to_string(),
            sources,
            latest_binaries,
            reverse_indexes,
            binary_sources,
            binary_conflicts,
        }
    }

    pub fn distribution(&self) -> &str {
        &self.distribution
    }

    pub fn sources(&self) -> &BTreeMap<String, SourcePackageRecord> {
        &self.sources
    }

    pub fn source(&self, name: &str) -> Option<&SourcePackageRecord> {
        self.sources.get(name)
    }

    pub fn contains_source(&self, name: &str) -> bool {
        self.sources.contains_key(name)
    }

    pub fn latest_binaries(&self) -> &HashSet<String> {
        &self.latest_binaries
    }

    /// Whether `name` is produced by the latest upload of some source.
    pub fn is_latest_binary(&self, name: &str) -> bool {
        self.latest_binaries.contains(name)
    }

    pub fn reverse_index(&self, kind: BuildRelationKind) -> &ReverseIndexMap {
        let position = BuildRelationKind::ALL
            .iter()
            .position(|k| *k == kind)
            .unwrap_or_default();
        &self.reverse_indexes[position]
    }

    pub fn reverse_indexes(&self) -> &[ReverseIndexMap] {
        &self.reverse_indexes
    }

    /// The source producing `binary`. When two sources claim the same binary
    /// the first one in source-name order is returned; the others are listed
    /// in [`ArchiveIndex::binary_conflicts`].
    pub fn source_of_binary(&self, binary: &str) -> Option<&SourcePackageRecord> {
        self.binary_sources
            .get(binary)
            .and_then(|name| self.sources.get(name))
    }

    pub fn binary_conflicts(&self) -> &[BinaryConflict] {
        &self.binary_conflicts
    }
}
