use super::control::{split_list, ControlParagraph};
use super::relation::{Relation, RelationClause};
use super::relation_kind::RelationKind;
use super::version::DebianVersion;
use crate::shared::error::RdepsError;
use crate::shared::Result;

/// A binary package stanza from a `Packages` index.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryPackage {
    name: String,
    version: DebianVersion,
    architecture: String,
    section: Option<String>,
    source: Option<String>,
    pre_depends: Relation,
    depends: Relation,
    recommends: Relation,
    suggests: Relation,
    provides: Vec<String>,
}

impl BinaryPackage {
    pub fn from_paragraph(paragraph: &ControlParagraph) -> Result<Self> {
        let required = |field: &str| {
            paragraph.get(field).ok_or_else(|| RdepsError::Validation {
                message: format!(
                    "binary stanza at line {} has no {} field",
                    paragraph.start_line(),
                    field
                ),
            })
        };
        let relation = |kind: RelationKind| Relation::parse(paragraph.get(kind.field_name()).unwrap_or(""));

        Ok(Self {
            name: required("Package")?.to_string(),
            version: DebianVersion::parse(required("Version")?)?,
            architecture: required("Architecture")?.to_string(),
            section: paragraph.get("Section").map(str::to_string),
            // `Source: foo (1.2-1)` when the source version differs
            source: paragraph
                .get("Source")
                .and_then(|s| s.split_whitespace().next())
                .map(str::to_string),
            pre_depends: relation(RelationKind::PreDepends),
            depends: relation(RelationKind::Depends),
            recommends: relation(RelationKind::Recommends),
            suggests: relation(RelationKind::Suggests),
            provides: split_list(paragraph.get("Provides").unwrap_or(""))
                .into_iter()
                .filter_map(|p| p.split_whitespace().next().map(str::to_string))
                .collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &DebianVersion {
        &self.version
    }

    pub fn architecture(&self) -> &str {
        &self.architecture
    }

    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    /// Source package name; a binary without a `Source` field is built by a
    /// source of the same name.
    pub fn source(&self) -> &str {
        self.source.as_deref().unwrap_or(&self.name)
    }

    pub fn relation(&self, kind: RelationKind) -> &Relation {
        match kind {
            RelationKind::PreDepends => &self.pre_depends,
            RelationKind::Depends => &self.depends,
            RelationKind::Recommends => &self.recommends,
            RelationKind::Suggests => &self.suggests,
        }
    }

    /// Or-groups of the given relation kinds, in the order of `kinds`.
    pub fn clauses<'a>(
        &'a self,
        kinds: &'a [RelationKind],
    ) -> impl Iterator<Item = (RelationKind, &'a RelationClause)> + 'a {
        kinds
            .iter()
            .flat_map(move |kind| self.relation(*kind).clauses().iter().map(move |c| (*kind, c)))
    }

    pub fn provides(&self) -> &[String] {
        &self.provides
    }
}
