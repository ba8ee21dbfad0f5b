use crate::archive::domain::{parse_paragraphs, ArchiveIndex, SourcePackageRecord};
use crate::ports::outbound::IndexText;
use crate::shared::error::RdepsError;
use crate::shared::Result;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A `Sources` stanza that could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub origin: PathBuf,
    pub line: usize,
    pub reason: String,
}

/// Everything the builder learned besides the index itself.
#[derive(Debug, Clone)]
pub struct IndexBuildOutcome {
    pub index: ArchiveIndex,
    pub skipped: Vec<SkippedRecord>,
    /// Number of records dropped because a higher version of the same source
    /// was seen in another component
    pub superseded: usize,
}

/// ArchiveIndexBuilder service: merges the `Sources` indexes of one
/// distribution into an [`ArchiveIndex`].
///
/// Only the highest version of each source name survives (the latest upload),
/// so binaries dropped by that upload do not count as part of the archive.
pub struct ArchiveIndexBuilder {
    distribution: String,
    sources: BTreeMap<String, SourcePackageRecord>,
    skipped: Vec<SkippedRecord>,
    superseded: usize,
}

impl ArchiveIndexBuilder {
    pub fn new(distribution: &str) -> Self {
        Self {
            distribution: distribution.to_string(),
            sources: BTreeMap::new(),
            skipped: Vec::new(),
            superseded: 0,
        }
    }

    /// Builds the index from already read index files.
    ///
    /// # Errors
    /// Returns `SnapshotParseError` if any file is not a control file.
    pub fn build(distribution: &str, inputs: &[IndexText]) -> Result<IndexBuildOutcome> {
        let mut builder = Self::new(distribution);
        for input in inputs {
            builder.add_index_text(input)?;
        }
        Ok(builder.finish())
    }

    /// Merges every stanza of one `Sources` file.
    ///
    /// Stanzas lacking a required field or carrying an unparsable version are
    /// skipped and recorded; a structurally broken file is an error.
    pub fn add_index_text(&mut self, input: &IndexText) -> Result<()> {
        let paragraphs =
            parse_paragraphs(&input.content).map_err(|e| RdepsError::SnapshotParseError {
                path: input.origin.clone(),
                line: e.line,
                details: e.details,
            })?;

        for paragraph in &paragraphs {
            match SourcePackageRecord::from_paragraph(paragraph) {
                Ok(record) => self.add_record(record),
                Err(e) => self.skipped.push(SkippedRecord {
                    origin: input.origin.clone(),
                    line: paragraph.start_line(),
                    reason: e.to_string(),
                }),
            }
        }
        Ok(())
    }

    /// Keeps `record` unless a record of the same name with an equal or
    /// higher version is already present.
    pub fn add_record(&mut self, record: SourcePackageRecord) {
        match self.sources.entry(record.name().to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
            Entry::Occupied(mut slot) => {
                self.superseded += 1;
                if record.version() > slot.get().version() {
                    slot.insert(record);
                }
            }
        }
    }

    pub fn finish(self) -> IndexBuildOutcome {
        IndexBuildOutcome {
            index: ArchiveIndex::from_sources(&self.distribution, self.sources),
            skipped: self.skipped,
            superseded: self.superseded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::domain::BuildRelationKind;

    const MAIN: &str = "\
Package: foo
Binary: foo-old
Version: 1.0
Maintainer: M <m@example.org>

Package: libbar
Binary: libbar1, libbar-dev
Version: 1.9
Maintainer: M <m@example.org>
Build-Depends: debhelper-compat (= 13)

Package: app2
Binary: app2
Version: 0.1
Maintainer: M <m@example.org>
Build-Depends: libbar-dev (>= 1.0), python-dev
Build-Depends-Arch: libbar-dev
Testsuite-Triggers: python-nose, ,
";

    const CONTRIB: &str = "\
Package: foo
Binary: foo-bin
Version: 2.0
Maintainer: M <m@example.org>
Build-Depends-Indep: libbar-dev

Package: libbar
Binary: libbar0
Version: 1.10
Maintainer: M <m@example.org>
";

    fn inputs() -> Vec<IndexText> {
        vec![
            IndexText::new("/lists/main_Sources", MAIN),
            IndexText::new("/lists/contrib_Sources", CONTRIB),
        ]
    }

    #[test]
    fn test_keeps_highest_version_only() {
        let outcome = ArchiveIndexBuilder::build("unstable", &inputs()).unwrap();
        let index = outcome.index;

        assert_eq!(index.source("foo").unwrap().version().as_str(), "2.0");
        assert!(index.is_latest_binary("foo-bin"));
        assert!(!index.is_latest_binary("foo-old"));
        assert_eq!(outcome.superseded, 2);
    }

    #[test]
    fn test_version_order_is_not_lexical() {
        let index = ArchiveIndexBuilder::build("unstable", &inputs()).unwrap().index;
        // 1.10 > 1.9, so the contrib record wins
        let libbar = index.source("libbar").unwrap();
        assert_eq!(libbar.version().as_str(), "1.10");
        assert!(index.is_latest_binary("libbar0"));
        assert!(!index.is_latest_binary("libbar1"));
    }

    #[test]
    fn test_lower_version_later_does_not_replace() {
        let reversed = vec![
            IndexText::new("/lists/contrib_Sources", CONTRIB),
            IndexText::new("/lists/main_Sources", MAIN),
        ];
        let index = ArchiveIndexBuilder::build("unstable", &reversed).unwrap().index;
        assert_eq!(index.source("foo").unwrap().version().as_str(), "2.0");
        assert_eq!(index.source("libbar").unwrap().version().as_str(), "1.10");
    }

    #[test]
    fn test_reverse_indexes() {
        let index = ArchiveIndexBuilder::build("unstable", &inputs()).unwrap().index;

        assert_eq!(
            index
                .reverse_index(BuildRelationKind::BuildDepends)
                .dependents("libbar-dev"),
            &["app2"]
        );
        assert_eq!(
            index
                .reverse_index(BuildRelationKind::BuildDependsIndep)
                .dependents("libbar-dev"),
            &["foo"]
        );
        assert_eq!(
            index
                .reverse_index(BuildRelationKind::BuildDependsArch)
                .dependents("libbar-dev"),
            &["app2"]
        );
        let triggers = index.reverse_index(BuildRelationKind::TestsuiteTriggers);
        assert_eq!(triggers.dependents("python-nose"), &["app2"]);
        assert_eq!(triggers.len(), 1);
        // superseded libbar 1.9 build-depended on debhelper-compat
        assert!(index
            .reverse_index(BuildRelationKind::BuildDepends)
            .dependents("debhelper-compat")
            .is_empty());
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let first = ArchiveIndexBuilder::build("unstable", &inputs()).unwrap().index;
        let second = ArchiveIndexBuilder::build("unstable", &inputs()).unwrap().index;
        assert_eq!(first, second);
    }

    #[test]
    fn test_incomplete_stanza_is_skipped_not_fatal() {
        let text = "Package: broken\nVersion: 1.0\n\nPackage: ok\nBinary: ok\nVersion: 1\nMaintainer: M <m@example.org>\n";
        let outcome =
            ArchiveIndexBuilder::build("unstable", &[IndexText::new("/lists/Sources", text)]).unwrap();

        assert!(outcome.index.contains_source("ok"));
        assert!(!outcome.index.contains_source("broken"));
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].line, 1);
        assert!(outcome.skipped[0].reason.contains("Binary"));
    }

    #[test]
    fn test_corrupt_file_is_fatal() {
        let result = ArchiveIndexBuilder::build(
            "unstable",
            &[IndexText::new("/lists/Sources", "Package: a\nnot a field\n")],
        );
        let err = result.unwrap_err();
        match err.downcast_ref::<RdepsError>() {
            Some(RdepsError::SnapshotParseError { path, line, .. }) => {
                assert_eq!(path, &PathBuf::from("/lists/Sources"));
                assert_eq!(*line, 2);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
