/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (apt lists, console, output files).
pub mod binary_package_cache;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod snapshot_reader;

pub use binary_package_cache::{BinaryPackageCache, PackageLookup, ReverseDependency};
pub use formatter::{GraphFormatter, ReportFormatter};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use snapshot_reader::{BinaryIndexReader, IndexText, SourceIndexReader};
