//! deb-rdeps - reverse-dependency graphs over Debian archive metadata
//!
//! This library answers "what still depends on this package?" for a Debian
//! distribution snapshot: it indexes the apt `Sources` lists, walks runtime
//! reverse dependencies up to a depth bound, attaches build and test
//! reverse dependencies as leaves, and classifies every node so the
//! remaining work of removing an obsolete runtime can be read off a graph.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`archive`): control file parsing, version ordering,
//!   the archive index, the traversal and node classification
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): apt lists on disk, the binary package cache,
//!   formatters and console progress
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use deb_rdeps::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<()> {
//! let reader = FileSystemReader::new("/var/lib/apt/lists", "ftp.debian.org_debian");
//! let snapshot = Snapshot::new("unstable", &["main".to_string()], "amd64");
//! let cache = Arc::new(InMemoryPackageCache::load(&reader, &snapshot)?);
//!
//! let use_case = GenerateRdepsUseCase::new(reader, cache, StderrProgressReporter::new());
//! let request = RdepsRequest::new(vec!["python2.7".to_string()], snapshot)
//!     .with_reference(Some("testing".to_string()));
//! let response = use_case.execute(request).await?;
//!
//! let formatter = DotFormatter::new();
//! for target in &response.graphs {
//!     println!("{}", formatter.format(&target.graph, target.decorations.as_ref())?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod archive;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::apt::InMemoryPackageCache;
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        DotFormatter, JsonFormatter, JsonReportFormatter, MarkdownReportFormatter, TextFormatter,
    };
    pub use crate::application::dto::{
        GraphFormat, MigrationRequest, MigrationResponse, RdepsRequest, RdepsResponse,
        ReportFormat, TargetFailure, TargetGraph,
    };
    pub use crate::application::read_models::{MigrationReport, MigrationRow, RowKind};
    pub use crate::application::use_cases::{AssessMigrationUseCase, GenerateRdepsUseCase};
    pub use crate::archive::domain::{
        ArchiveIndex, DebianVersion, DependencyGraph, EdgeKind, EdgeLabel, NodeClass,
        PackageName, Relation, RelationKind, Snapshot, SourcePackageRecord,
    };
    pub use crate::archive::policies::{ClassificationContext, NodeClassifier, ObsoleteDependencyPolicy};
    pub use crate::archive::services::{
        ArchiveIndexBuilder, GraphDecorations, GraphDecorator, RdepsGraphBuilder,
    };
    pub use crate::ports::outbound::{
        BinaryIndexReader, BinaryPackageCache, GraphFormatter, IndexText, OutputPresenter,
        PackageLookup, ProgressReporter, ReportFormatter, SourceIndexReader,
    };
    pub use crate::shared::error::{ExitCode, RdepsError};
    pub use crate::shared::Result;
}
