pub mod archive_index;
pub mod binary_package;
pub mod control;
pub mod dependency_graph;
pub mod package;
pub mod relation;
pub mod relation_kind;
pub mod snapshot;
pub mod source_package;
pub mod version;

pub use archive_index::{ArchiveIndex, BinaryConflict, ReverseIndexMap};
pub use binary_package::BinaryPackage;
pub use control::{parse_paragraphs, ControlParagraph, ControlParseError};
pub use dependency_graph::{DependencyGraph, Edge, EdgeKind, EdgeLabel, Node, NodeClass};
pub use package::PackageName;
pub use relation::{Relation, RelationClause, RelationTarget, VersionConstraint, VersionOperator};
pub use relation_kind::{BuildRelationKind, RelationKind};
pub use snapshot::Snapshot;
pub use source_package::{SourcePackageBuilder, SourcePackageRecord};
pub use version::DebianVersion;
