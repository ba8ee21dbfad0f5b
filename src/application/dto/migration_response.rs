use crate::application::read_models::MigrationReport;
use crate::archive::domain::DependencyGraph;

/// MigrationResponse - the report plus the graphs its rows reference
#[derive(Debug, Clone)]
pub struct MigrationResponse {
    pub report: MigrationReport,
    /// `(binary, graph)` for every row with a graph file
    pub graphs: Vec<(String, DependencyGraph)>,
}
