pub mod graph_decorator;
pub mod index_builder;
pub mod rdeps_graph_builder;

pub use graph_decorator::{GraphDecorations, GraphDecorator, DEFAULT_PACKAGE_URL_TEMPLATE};
pub use index_builder::{ArchiveIndexBuilder, IndexBuildOutcome, SkippedRecord};
pub use rdeps_graph_builder::{RdepsGraphBuilder, Traversal};
