use crate::archive::domain::{ArchiveIndex, Snapshot};
use crate::archive::services::ArchiveIndexBuilder;
use crate::ports::outbound::{ProgressReporter, SourceIndexReader};
use crate::shared::Result;
use anyhow::Context;

/// Reads the `Sources` index of every component and builds the archive
/// index, reporting skipped stanzas and binaries claimed by two sources.
///
/// # Errors
/// Any missing or corrupt index aborts the load; there is no partial index.
pub fn load_archive_index<R, P>(reader: &R, snapshot: &Snapshot, progress: &P) -> Result<ArchiveIndex>
where
    R: SourceIndexReader + ?Sized,
    P: ProgressReporter + ?Sized,
{
    let texts = snapshot
        .components
        .iter()
        .map(|component| reader.read_source_index(snapshot, component))
        .collect::<Result<Vec<_>>>()?;

    let outcome = ArchiveIndexBuilder::build(&snapshot.distribution, &texts)
        .with_context(|| format!("Failed to index source packages of '{}'", snapshot.distribution))?;

    for skipped in &outcome.skipped {
        progress.report_error(&format!(
            "Skipping source stanza at {}:{}: {}",
            skipped.origin.display(),
            skipped.line,
            skipped.reason
        ));
    }
    for conflict in outcome.index.binary_conflicts() {
        progress.report_error(&format!(
            "Binary {} is listed by sources {} and {}; attributing it to {}",
            conflict.binary, conflict.kept_source, conflict.other_source, conflict.kept_source
        ));
    }

    Ok(outcome.index)
}
