use crate::application::read_models::MigrationReport;
use crate::archive::domain::DependencyGraph;
use crate::archive::services::GraphDecorations;
use crate::shared::Result;

/// GraphFormatter port for rendering a finished dependency graph
///
/// This port abstracts the interchange formats (DOT, text dump, JSON)
/// consumed by renderers and humans.
pub trait GraphFormatter {
    /// Formats one graph
    ///
    /// # Arguments
    /// * `graph` - The completed traversal output
    /// * `decorations` - Optional per-node annotations (hyperlinks)
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, graph: &DependencyGraph, decorations: Option<&GraphDecorations>) -> Result<String>;

    /// File extension used when graphs are written one per file
    fn file_extension(&self) -> &'static str;
}

/// ReportFormatter port for rendering the migration assessment
pub trait ReportFormatter {
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &MigrationReport) -> Result<String>;
}
