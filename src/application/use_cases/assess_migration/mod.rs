use super::snapshot_loader::load_archive_index;
use crate::application::dto::{MigrationRequest, MigrationResponse};
use crate::application::read_models::{MigrationReport, MigrationRow, RowKind};
use crate::archive::domain::{BuildRelationKind, DependencyGraph, RelationKind, SourcePackageRecord};
use crate::archive::policies::{ClassificationContext, NodeClassifier, ObsoleteDependencyPolicy};
use crate::archive::services::RdepsGraphBuilder;
use crate::ports::outbound::{BinaryPackageCache, ProgressReporter, SourceIndexReader};
use crate::shared::error::RdepsError;
use crate::shared::Result;
use std::sync::Arc;

/// Extension of the graph files referenced by report rows
pub const GRAPH_FILE_EXTENSION: &str = "dot";

/// AssessMigrationUseCase - how far each source package is from dropping
/// the obsolete runtime
///
/// For every requested source it counts obsolete build relations and, for
/// each of its binaries that still depends on the runtime, the distinct
/// packages depending on that binary.
pub struct AssessMigrationUseCase<R, C, P> {
    source_reader: R,
    cache: Arc<C>,
    progress_reporter: P,
}

/// Row and graph for one binary still on the obsolete runtime
type BinaryAssessment = (MigrationRow, DependencyGraph);

impl<R, C, P> AssessMigrationUseCase<R, C, P>
where
    R: SourceIndexReader,
    C: BinaryPackageCache,
    P: ProgressReporter,
{
    pub fn new(source_reader: R, cache: Arc<C>, progress_reporter: P) -> Self {
        Self {
            source_reader,
            cache,
            progress_reporter,
        }
    }

    /// # Errors
    /// Returns an error only when the snapshot cannot be loaded.
    pub fn execute(&self, request: MigrationRequest) -> Result<MigrationResponse> {
        self.progress_reporter.report(&format!(
            "Parsing Sources index ({})...",
            request.snapshot.distribution
        ));
        let index = load_archive_index(&self.source_reader, &request.snapshot, &self.progress_reporter)?;

        self.progress_reporter.report("Assessing source packages...");
        let classifier = NodeClassifier::new(ClassificationContext::new(&index, self.cache.as_ref(), None));
        let builder = RdepsGraphBuilder::new(&index, self.cache.as_ref()).with_classifier(&classifier);

        let mut rows = Vec::new();
        let mut graphs = Vec::new();
        let mut warnings = Vec::new();
        let mut assessed = 0;
        let total = request.sources.len();

        for (position, name) in request.sources.iter().enumerate() {
            self.progress_reporter
                .report_progress(position + 1, total, Some(name));

            let Some(source) = index.source(name) else {
                self.warn(&mut warnings, format!("{}: unknown source package, skipped", name));
                continue;
            };
            assessed += 1;
            let mut blocking = false;

            let build_relations = Self::count_obsolete_build_relations(source, &request.policy);
            if build_relations > 0 {
                blocking = true;
                rows.push(MigrationRow {
                    kind: RowKind::Source,
                    package: format!("src:{}", source.name()),
                    source: source.name().to_string(),
                    maintainer: source.maintainer().to_string(),
                    forward_dependencies: build_relations,
                    reverse_dependencies: 0,
                    graph_file: None,
                });
            }

            for binary in source.binaries() {
                if let Some((row, graph)) = self.assess_binary(&builder, source, binary, &request) {
                    blocking = true;
                    if row.graph_file.is_some() {
                        graphs.push((binary.clone(), graph));
                    }
                    rows.push(row);
                }
            }

            if !blocking {
                self.warn(
                    &mut warnings,
                    format!("{} has no obsolete dependencies?", source.name()),
                );
            }
        }

        let report = MigrationReport::new(
            index.distribution(),
            request.level,
            total,
            assessed,
            rows,
            warnings,
        );
        self.progress_reporter.report_completion(&format!(
            "✅ Assessed {} source package(s), {} report row(s)",
            assessed, report.summary.rows
        ));

        Ok(MigrationResponse { report, graphs })
    }

    /// Build and test relations whose first alternative is obsolete.
    fn count_obsolete_build_relations(source: &SourcePackageRecord, policy: &ObsoleteDependencyPolicy) -> usize {
        BuildRelationKind::ALL
            .iter()
            .flat_map(|kind| source.relation(*kind).first_names())
            .filter(|name| policy.is_obsolete(name))
            .count()
    }

    /// `None` when the binary has no installable version in the cache or
    /// none of its tracked or-groups starts with an obsolete package.
    fn assess_binary(
        &self,
        builder: &RdepsGraphBuilder<'_, C>,
        source: &SourcePackageRecord,
        binary: &str,
        request: &MigrationRequest,
    ) -> Option<BinaryAssessment> {
        if let Err(err) = self.cache.installable(binary) {
            if let Some(RdepsError::VirtualOrForeignArchPackage { .. }) = err.downcast_ref::<RdepsError>() {
                self.progress_reporter
                    .report(&format!("Skipping {}: {}", binary, err));
            }
            return None;
        }

        let clauses = self
            .cache
            .forward_dependencies(binary, &RelationKind::TRACKED)
            .ok()?;
        if !clauses
            .iter()
            .any(|clause| request.policy.is_obsolete(clause.first().name()))
        {
            return None;
        }

        let graph = builder.generate(binary, request.level);
        let graph_file = (request.write_graphs && graph.edge_count() > 0)
            .then(|| format!("{}.{}", binary, GRAPH_FILE_EXTENSION));

        let row = MigrationRow {
            kind: RowKind::Binary,
            package: binary.to_string(),
            source: source.name().to_string(),
            maintainer: source.maintainer().to_string(),
            forward_dependencies: clauses.len(),
            reverse_dependencies: graph.distinct_edge_count(),
            graph_file,
        };
        Some((row, graph))
    }

    fn warn(&self, warnings: &mut Vec<String>, message: String) {
        self.progress_reporter.report_error(&message);
        warnings.push(message);
    }
}
