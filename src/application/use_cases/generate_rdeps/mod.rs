use super::snapshot_loader::load_archive_index;
use crate::application::dto::{RdepsRequest, RdepsResponse, TargetFailure, TargetGraph};
use crate::archive::domain::{ArchiveIndex, PackageName};
use crate::archive::policies::{ClassificationContext, NodeClassifier};
use crate::archive::services::{GraphDecorator, RdepsGraphBuilder, Traversal};
use crate::ports::outbound::{BinaryPackageCache, ProgressReporter, SourceIndexReader};
use crate::shared::error::RdepsError;
use crate::shared::Result;
use futures::stream::{self, StreamExt};
use std::sync::Arc;

/// GenerateRdepsUseCase - builds one reverse-dependency graph per target
///
/// The archive index (and the reference index, when requested) is loaded
/// once; targets are then traversed on blocking worker threads, at most
/// `request.jobs` at a time, all sharing the same read-only index and cache.
///
/// # Type Parameters
/// * `R` - SourceIndexReader implementation
/// * `C` - BinaryPackageCache implementation, shared with the workers
/// * `P` - ProgressReporter implementation
pub struct GenerateRdepsUseCase<R, C, P> {
    source_reader: R,
    cache: Arc<C>,
    progress_reporter: P,
}

impl<R, C, P> GenerateRdepsUseCase<R, C, P>
where
    R: SourceIndexReader,
    C: BinaryPackageCache + Send + Sync + 'static,
    P: ProgressReporter,
{
    pub fn new(source_reader: R, cache: Arc<C>, progress_reporter: P) -> Self {
        Self {
            source_reader,
            cache,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Errors
    /// Only snapshot loading errors are returned; per-target problems end up
    /// in `RdepsResponse::failures`.
    pub async fn execute(&self, request: RdepsRequest) -> Result<RdepsResponse> {
        let (index, reference) = self.load_indexes(&request)?;

        self.progress_reporter.report(&format!(
            "Processing reverse dependencies (with max {} depth level)...",
            request.level
        ));

        let total = request.targets.len();
        let mut outcomes = stream::iter(request.targets.iter().cloned().enumerate())
            .map(|(position, target)| {
                let index = Arc::clone(&index);
                let reference = reference.clone();
                let cache = Arc::clone(&self.cache);
                let level = request.level;
                async move {
                    let outcome = Self::traverse_target(target.clone(), index, reference, cache, level).await;
                    (position, target, outcome)
                }
            })
            .buffer_unordered(request.jobs.max(1));

        let mut graphs = Vec::new();
        let mut failures = Vec::new();
        let mut finished = 0;
        while let Some((position, target, outcome)) = outcomes.next().await {
            finished += 1;
            self.progress_reporter
                .report_progress(finished, total, Some(&target));
            match outcome {
                Ok(traversal) => {
                    for name in &traversal.unresolved {
                        self.progress_reporter.report_error(&format!(
                            "{}: {} is not in the binary package cache, shown as a leaf",
                            target, name
                        ));
                    }
                    graphs.push((position, target, traversal));
                }
                Err(reason) => {
                    self.progress_reporter
                        .report_error(&format!("{}: {}", target, reason));
                    failures.push((
                        position,
                        TargetFailure { target, reason },
                    ));
                }
            }
        }

        graphs.sort_by_key(|(position, _, _)| *position);
        failures.sort_by_key(|(position, _)| *position);

        let decorator = request.package_url_template.as_deref().map(GraphDecorator::new);
        let graphs = graphs
            .into_iter()
            .map(|(_, target, traversal)| TargetGraph {
                decorations: decorator.as_ref().map(|decorator| {
                    decorator.decorate(
                        &traversal.graph,
                        index.latest_binaries(),
                        index.distribution(),
                    )
                }),
                target,
                graph: traversal.graph,
                unresolved: traversal.unresolved,
            })
            .collect::<Vec<_>>();

        self.progress_reporter.report_completion(&format!(
            "✅ Generated {} graph(s), {} failed",
            graphs.len(),
            failures.len()
        ));

        Ok(RdepsResponse {
            graphs,
            failures: failures.into_iter().map(|(_, failure)| failure).collect(),
        })
    }

    fn load_indexes(&self, request: &RdepsRequest) -> Result<(Arc<ArchiveIndex>, Option<Arc<ArchiveIndex>>)> {
        self.progress_reporter.report(&format!(
            "Parsing Sources index ({})...",
            request.snapshot.distribution
        ));
        let index = load_archive_index(&self.source_reader, &request.snapshot, &self.progress_reporter)?;

        let reference = match &request.reference_distribution {
            Some(distribution) => {
                self.progress_reporter
                    .report(&format!("Parsing Sources index ({})...", distribution));
                let snapshot = request.snapshot.with_distribution(distribution);
                Some(Arc::new(load_archive_index(
                    &self.source_reader,
                    &snapshot,
                    &self.progress_reporter,
                )?))
            }
            None => None,
        };

        Ok((Arc::new(index), reference))
    }

    /// Runs one traversal on a blocking thread. A target that is neither
    /// built by any source nor known to the cache is a failure; a cruft
    /// target still yields its single-node graph.
    async fn traverse_target(
        target: String,
        index: Arc<ArchiveIndex>,
        reference: Option<Arc<ArchiveIndex>>,
        cache: Arc<C>,
        level: u32,
    ) -> std::result::Result<Traversal, String> {
        let name = PackageName::new(target).map_err(|e| e.to_string())?;

        tokio::task::spawn_blocking(move || {
            let target = name.as_str();
            if !index.is_latest_binary(target) && !cache.contains(target) {
                return Err(RdepsError::UnknownPackage {
                    name: target.to_string(),
                }
                .to_string());
            }

            let context = ClassificationContext::new(&index, cache.as_ref(), reference.as_deref());
            let classifier = NodeClassifier::new(context);
            Ok(RdepsGraphBuilder::new(&index, cache.as_ref())
                .with_classifier(&classifier)
                .traverse(target, level))
        })
        .await
        .map_err(|e| format!("traversal worker failed: {}", e))?
    }
}
