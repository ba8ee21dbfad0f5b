use super::control::{split_list, split_people, ControlParagraph};
use super::relation::Relation;
use super::relation_kind::BuildRelationKind;
use super::version::DebianVersion;
use crate::shared::error::RdepsError;
use crate::shared::Result;

/// One source package of an archive snapshot, as listed in a `Sources` index.
///
/// Relationship fields are kept parsed; fields missing from the index are empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SourcePackageRecord {
    name: String,
    version: DebianVersion,
    binaries: Vec<String>,
    build_depends: Relation,
    build_depends_indep: Relation,
    build_depends_arch: Relation,
    testsuite_triggers: Relation,
    maintainer: String,
    uploaders: Vec<String>,
    section: Option<String>,
}

impl SourcePackageRecord {
    pub fn builder(name: &str, version: &str) -> SourcePackageBuilder {
        SourcePackageBuilder::new(name, version)
    }

    /// Reads a `Sources` stanza. `Package`, `Version`, `Binary` and
    /// `Maintainer` are required.
    pub fn from_paragraph(paragraph: &ControlParagraph) -> Result<Self> {
        let required = |field: &str| {
            paragraph.get(field).ok_or_else(|| RdepsError::Validation {
                message: format!(
                    "source stanza at line {} has no {} field",
                    paragraph.start_line(),
                    field
                ),
            })
        };

        let mut builder = Self::builder(required("Package")?, required("Version")?)
            .binaries(split_list(required("Binary")?))
            .maintainer(required("Maintainer")?)
            .uploaders(split_people(paragraph.get("Uploaders").unwrap_or("")));

        for kind in BuildRelationKind::ALL {
            if let Some(field) = paragraph.get(kind.field_name()) {
                builder = builder.relation(kind, field);
            }
        }
        if let Some(section) = paragraph.get("Section") {
            builder = builder.section(section);
        }

        builder.build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &DebianVersion {
        &self.version
    }

    pub fn binaries(&self) -> &[String] {
        &self.binaries
    }

    pub fn produces(&self, binary: &str) -> bool {
        self.binaries.iter().any(|b| b == binary)
    }

    pub fn relation(&self, kind: BuildRelationKind) -> &Relation {
        match kind {
            BuildRelationKind::BuildDepends => &self.build_depends,
            BuildRelationKind::BuildDependsIndep => &self.build_depends_indep,
            BuildRelationKind::BuildDependsArch => &self.build_depends_arch,
            BuildRelationKind::TestsuiteTriggers => &self.testsuite_triggers,
        }
    }

    pub fn maintainer(&self) -> &str {
        &self.maintainer
    }

    pub fn uploaders(&self) -> &[String] {
        &self.uploaders
    }

    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }
}

/// Builder for [`SourcePackageRecord`]
#[derive(Debug, Clone)]
pub struct SourcePackageBuilder {
    name: String,
    version: String,
    binaries: Vec<String>,
    relations: Vec<(BuildRelationKind, String)>,
    maintainer: String,
    uploaders: Vec<String>,
    section: Option<String>,
}

impl SourcePackageBuilder {
    fn new(name: &str, version: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            version: version.to_string(),
            binaries: Vec::new(),
            relations: Vec::new(),
            maintainer: String::new(),
            uploaders: Vec::new(),
            section: None,
        }
    }

    pub fn binaries<I, S>(mut self, binaries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.binaries = binaries.into_iter().map(Into::into).collect();
        self
    }

    pub fn relation(mut self, kind: BuildRelationKind, field: &str) -> Self {
        self.relations.push((kind, field.to_string()));
        self
    }

    pub fn build_depends(self, field: &str) -> Self {
        self.relation(BuildRelationKind::BuildDepends, field)
    }

    pub fn testsuite_triggers(self, field: &str) -> Self {
        self.relation(BuildRelationKind::TestsuiteTriggers, field)
    }

    pub fn maintainer(mut self, maintainer: &str) -> Self {
        self.maintainer = maintainer.trim().to_string();
        self
    }

    pub fn uploaders(mut self, uploaders: Vec<String>) -> Self {
        self.uploaders = uploaders;
        self
    }

    pub fn section(mut self, section: &str) -> Self {
        self.section = Some(section.trim().to_string());
        self
    }

    pub fn build(self) -> Result<SourcePackageRecord> {
        if self.name.is_empty() {
            return Err(RdepsError::Validation {
                message: "source package name cannot be empty".to_string(),
            }
            .into());
        }
        let version = DebianVersion::parse(&self.version)?;

        let mut record = SourcePackageRecord {
            name: self.name,
            version,
            binaries: self.binaries,
            build_depends: Relation::default(),
            build_depends_indep: Relation::default(),
            build_depends_arch: Relation::default(),
            testsuite_triggers: Relation::default(),
            maintainer: self.maintainer,
            uploaders: self.uploaders,
            section: self.section,
        };
        for (kind, field) in self.relations {
            let parsed = Relation::parse(&field);
            match kind {
                BuildRelationKind::BuildDepends => record.build_depends = parsed,
                BuildRelationKind::BuildDependsIndep => record.build_depends_indep = parsed,
                BuildRelationKind::BuildDependsArch => record.build_depends_arch = parsed,
                BuildRelationKind::TestsuiteTriggers => record.testsuite_triggers = parsed,
            }
        }
        Ok(record)
    }
}
