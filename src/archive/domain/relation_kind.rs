use std::fmt;

/// Relationship fields of a binary package that the cache understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RelationKind {
    PreDepends,
    Depends,
    Recommends,
    Suggests,
}

impl RelationKind {
    pub const ALL: [RelationKind; 4] = [
        RelationKind::PreDepends,
        RelationKind::Depends,
        RelationKind::Recommends,
        RelationKind::Suggests,
    ];

    /// Relations followed in both directions: reverse traversal and forward
    /// obsolete-dependency detection use the same set.
    pub const TRACKED: [RelationKind; 2] = [RelationKind::Depends, RelationKind::Recommends];

    pub fn field_name(&self) -> &'static str {
        match self {
            RelationKind::PreDepends => "Pre-Depends",
            RelationKind::Depends => "Depends",
            RelationKind::Recommends => "Recommends",
            RelationKind::Suggests => "Suggests",
        }
    }

    pub fn is_tracked(&self) -> bool {
        Self::TRACKED.contains(self)
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Build-time and test-trigger relationship fields of a source package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuildRelationKind {
    BuildDepends,
    BuildDependsIndep,
    BuildDependsArch,
    TestsuiteTriggers,
}

impl BuildRelationKind {
    pub const ALL: [BuildRelationKind; 4] = [
        BuildRelationKind::BuildDepends,
        BuildRelationKind::BuildDependsIndep,
        BuildRelationKind::BuildDependsArch,
        BuildRelationKind::TestsuiteTriggers,
    ];

    pub fn field_name(&self) -> &'static str {
        match self {
            BuildRelationKind::BuildDepends => "Build-Depends",
            BuildRelationKind::BuildDependsIndep => "Build-Depends-Indep",
            BuildRelationKind::BuildDependsArch => "Build-Depends-Arch",
            BuildRelationKind::TestsuiteTriggers => "Testsuite-Triggers",
        }
    }
}

impl fmt::Display for BuildRelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracked_relations() {
        assert!(RelationKind::Depends.is_tracked());
        assert!(RelationKind::Recommends.is_tracked());
        assert!(!RelationKind::Suggests.is_tracked());
        assert!(!RelationKind::PreDepends.is_tracked());
    }

    #[test]
    fn test_field_names() {
        assert_eq!(RelationKind::PreDepends.to_string(), "Pre-Depends");
        assert_eq!(
            BuildRelationKind::TestsuiteTriggers.to_string(),
            "Testsuite-Triggers"
        );
        assert_eq!(
            BuildRelationKind::ALL.map(|k| k.field_name()),
            [
                "Build-Depends",
                "Build-Depends-Indep",
                "Build-Depends-Arch",
                "Testsuite-Triggers"
            ]
        );
    }
}
