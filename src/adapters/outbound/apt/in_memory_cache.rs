use crate::archive::domain::{parse_paragraphs, BinaryPackage, RelationKind, Snapshot};
use crate::archive::services::SkippedRecord;
use crate::ports::outbound::{
    BinaryIndexReader, BinaryPackageCache, IndexText, PackageLookup, ReverseDependency,
};
use crate::shared::error::RdepsError;
use crate::shared::Result;
use std::collections::{BTreeMap, HashMap, HashSet};

/// InMemoryPackageCache adapter: the binary packages of one architecture,
/// loaded from apt `Packages` indexes.
///
/// When a name appears more than once the highest version wins. Stanzas
/// built for another architecture and names that are only ever provided
/// resolve to [`PackageLookup::Virtual`].
///
/// The reverse map is computed once at load time over every relation kind
/// and every alternative of every or-group, duplicates included.
#[derive(Debug, Default)]
pub struct InMemoryPackageCache {
    architecture: String,
    packages: BTreeMap<String, BinaryPackage>,
    foreign: HashSet<String>,
    provided: HashSet<String>,
    reverse: HashMap<String, Vec<ReverseDependency>>,
    skipped: Vec<SkippedRecord>,
}

impl InMemoryPackageCache {
    /// Reads the `Packages` index of every component in `snapshot`.
    ///
    /// # Errors
    /// Fails with `MissingSnapshotFile` if any component's index is absent,
    /// or `SnapshotParseError` if one is not a control file.
    pub fn load<R: BinaryIndexReader + ?Sized>(reader: &R, snapshot: &Snapshot) -> Result<Self> {
        let texts = snapshot
            .components
            .iter()
            .map(|component| reader.read_binary_index(snapshot, component))
            .collect::<Result<Vec<_>>>()?;
        Self::from_index_texts(&snapshot.architecture, &texts)
    }

    pub fn from_index_texts(architecture: &str, texts: &[IndexText]) -> Result<Self> {
        let mut cache = Self {
            architecture: architecture.to_string(),
            ..Self::default()
        };
        for text in texts {
            cache.add_index_text(text)?;
        }
        cache.provided.retain(|name| !cache.packages.contains_key(name));
        cache.foreign.retain(|name| !cache.packages.contains_key(name));
        cache.build_reverse_map();
        Ok(cache)
    }

    fn add_index_text(&mut self, text: &IndexText) -> Result<()> {
        let paragraphs =
            parse_paragraphs(&text.content).map_err(|e| RdepsError::SnapshotParseError {
                path: text.origin.clone(),
                line: e.line,
                details: e.details,
            })?;

        for paragraph in &paragraphs {
            let package = match BinaryPackage::from_paragraph(paragraph) {
                Ok(package) => package,
                Err(e) => {
                    self.skipped.push(SkippedRecord {
                        origin: text.origin.clone(),
                        line: paragraph.start_line(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            if !self.is_native(package.architecture()) {
                self.foreign.insert(package.name().to_string());
                continue;
            }
            self.provided.extend(package.provides().iter().cloned());

            let newer = match self.packages.get(package.name()) {
                Some(existing) => package.version() > existing.version(),
                None => true,
            };
            if newer {
                self.packages.insert(package.name().to_string(), package);
            }
        }
        Ok(())
    }

    fn is_native(&self, architecture: &str) -> bool {
        architecture == self.architecture || architecture == "all"
    }

    fn build_reverse_map(&mut self) {
        let mut reverse: HashMap<String, Vec<ReverseDependency>> = HashMap::new();
        for package in self.packages.values() {
            for (kind, clause) in package.clauses(&RelationKind::ALL) {
                for target in clause.alternatives() {
                    reverse
                        .entry(target.name().to_string())
                        .or_default()
                        .push(ReverseDependency {
                            dependent: package.name().to_string(),
                            kind,
                        });
                }
            }
        }
        self.reverse = reverse;
    }

    pub fn architecture(&self) -> &str {
        &self.architecture
    }

    /// Installable package names, sorted.
    pub fn package_names(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Stanzas dropped because a required field was missing or malformed
    pub fn skipped(&self) -> &[SkippedRecord] {
        &self.skipped
    }
}

impl BinaryPackageCache for InMemoryPackageCache {
    fn lookup(&self, name: &str) -> PackageLookup<'_> {
        if let Some(package) = self.packages.get(name) {
            PackageLookup::Installable(package)
        } else if self.provided.contains(name) || self.foreign.contains(name) {
            PackageLookup::Virtual
        } else {
            PackageLookup::Unknown
        }
    }

    fn reverse_dependencies(&self, name: &str) -> &[ReverseDependency] {
        self.reverse.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}
