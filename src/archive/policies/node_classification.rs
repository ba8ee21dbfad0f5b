//! Ordered classification rules for dependent nodes.
//!
//! Rules run in [`ClassificationRule::ORDER`]; every rule that matches
//! overrides the verdict of the rules before it, and a node no rule matches
//! is [`NodeClass::Active`].

use crate::archive::domain::{ArchiveIndex, NodeClass};
use crate::ports::outbound::BinaryPackageCache;

/// A package discovered as a dependent during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate<'a> {
    /// Runtime reverse dependency: a binary package name
    Binary(&'a str),
    /// Build or test-trigger reverse dependency: a source package name
    Source(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationRule {
    /// Not in the reference distribution any more
    AbsentFromReference,
    /// Built from the same source as the package being expanded
    SameSource,
    Metapackage,
    /// Section in contrib or non-free
    RestrictedComponent,
}

const RESTRICTED_COMPONENTS: [&str; 3] = ["contrib/", "non-free/", "non-free-firmware/"];

impl ClassificationRule {
    pub const ORDER: [ClassificationRule; 4] = [
        ClassificationRule::AbsentFromReference,
        ClassificationRule::SameSource,
        ClassificationRule::Metapackage,
        ClassificationRule::RestrictedComponent,
    ];

    /// `None` means the rule has no opinion.
    pub fn evaluate(
        &self,
        context: &ClassificationContext<'_>,
        expanded: &str,
        candidate: Candidate<'_>,
    ) -> Option<NodeClass> {
        let matched = match self {
            ClassificationRule::AbsentFromReference => {
                let reference = context.reference?;
                match candidate {
                    Candidate::Binary(name) => !reference.is_latest_binary(name),
                    Candidate::Source(name) => !reference.contains_source(name),
                }
            }
            ClassificationRule::SameSource => {
                let expanded_source = context.source_name_of(expanded)?;
                match candidate {
                    Candidate::Binary(name) => context.source_name_of(name) == Some(expanded_source),
                    Candidate::Source(name) => name == expanded_source,
                }
            }
            ClassificationRule::Metapackage => context
                .sections(candidate)
                .iter()
                .any(|section| section.rsplit('/').next() == Some("metapackages")),
            ClassificationRule::RestrictedComponent => context.sections(candidate).iter().any(|section| {
                RESTRICTED_COMPONENTS
                    .iter()
                    .any(|component| section.starts_with(component))
            }),
        };

        matched.then(|| self.class())
    }

    pub fn class(&self) -> NodeClass {
        match self {
            ClassificationRule::AbsentFromReference => NodeClass::RemovedFromReference,
            ClassificationRule::SameSource => NodeClass::SameSource,
            ClassificationRule::Metapackage => NodeClass::Metapackage,
            ClassificationRule::RestrictedComponent => NodeClass::RestrictedComponent,
        }
    }
}

/// What the rules may consult: the tracked snapshot, its binary cache and
/// optionally a reference snapshot (usually testing).
pub struct ClassificationContext<'a> {
    pub index: &'a ArchiveIndex,
    pub cache: &'a dyn BinaryPackageCache,
    pub reference: Option<&'a ArchiveIndex>,
}

impl<'a> ClassificationContext<'a> {
    pub fn new(
        index: &'a ArchiveIndex,
        cache: &'a dyn BinaryPackageCache,
        reference: Option<&'a ArchiveIndex>,
    ) -> Self {
        Self {
            index,
            cache,
            reference,
        }
    }

    fn source_name_of(&self, binary: &str) -> Option<&'a str> {
        self.index.source_of_binary(binary).map(|source| source.name())
    }

    /// Binary section first, then the section of its source.
    fn sections(&self, candidate: Candidate<'_>) -> Vec<&'a str> {
        let mut sections = Vec::new();
        match candidate {
            Candidate::Binary(name) => {
                sections.extend(self.cache.section(name));
                sections.extend(self.index.source_of_binary(name).and_then(|s| s.section()));
            }
            Candidate::Source(name) => {
                sections.extend(self.index.source(name).and_then(|s| s.section()));
            }
        }
        sections
    }
}

/// Applies an ordered rule list; the last matching rule wins.
pub struct NodeClassifier<'a> {
    context: ClassificationContext<'a>,
    rules: Vec<ClassificationRule>,
}

impl<'a> NodeClassifier<'a> {
    pub fn new(context: ClassificationContext<'a>) -> Self {
        Self::with_rules(context, ClassificationRule::ORDER.to_vec())
    }

    pub fn with_rules(context: ClassificationContext<'a>, rules: Vec<ClassificationRule>) -> Self {
        Self { context, rules }
    }

    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    /// Classifies `candidate`, found as a dependent of `expanded`.
    pub fn classify(&self, expanded: &str, candidate: Candidate<'_>) -> NodeClass {
        self.rules
            .iter()
            .filter_map(|rule| rule.evaluate(&self.context, expanded, candidate))
            .last()
            .unwrap_or(NodeClass::Active)
    }
}
