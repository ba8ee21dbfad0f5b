/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod migration_request;
mod migration_response;
mod output_format;
mod rdeps_request;
mod rdeps_response;

pub use migration_request::{MigrationRequest, DEFAULT_REPORT_LEVEL};
pub use migration_response::MigrationResponse;
pub use output_format::{GraphFormat, ReportFormat};
pub use rdeps_request::{RdepsRequest, DEFAULT_LEVEL};
pub use rdeps_response::{RdepsResponse, TargetFailure, TargetGraph};
