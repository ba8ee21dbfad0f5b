//! Read models for the reporting side
//!
//! View-optimized structs assembled by use cases and consumed by
//! report formatters.

pub mod migration_report;

pub use migration_report::{MigrationReport, MigrationRow, MigrationSummary, RowKind};
