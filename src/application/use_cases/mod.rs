/// Use cases module containing application business logic orchestration
mod assess_migration;
mod generate_rdeps;
mod snapshot_loader;

pub use assess_migration::{AssessMigrationUseCase, GRAPH_FILE_EXTENSION};
pub use generate_rdeps::GenerateRdepsUseCase;
pub use snapshot_loader::load_archive_index;
