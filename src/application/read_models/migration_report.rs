//! Read model for the migration assessment
//!
//! One row per source package with obsolete build relations and one per
//! binary package with obsolete runtime relations.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowKind {
    /// `src:<name>`: obsolete build or test-trigger relations
    Source,
    /// A binary package with obsolete runtime relations
    Binary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationRow {
    pub kind: RowKind,
    /// `src:<name>` for source rows, the binary name otherwise
    pub package: String,
    pub source: String,
    pub maintainer: String,
    /// Source rows: obsolete build relations. Binary rows: tracked forward
    /// or-groups.
    pub forward_dependencies: usize,
    /// Distinct packages depending on this one (always 0 for source rows)
    pub reverse_dependencies: usize,
    /// Graph file written next to the report, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph_file: Option<String>,
}

impl MigrationRow {
    pub fn display_name(&self) -> &str {
        self.package.strip_prefix("src:").unwrap_or(&self.package)
    }

    /// Report order: fewest reverse dependencies first, ties broken by
    /// fewest forward dependencies, then name.
    pub fn report_order(&self, other: &Self) -> Ordering {
        (self.reverse_dependencies, self.forward_dependencies, &self.package).cmp(&(
            other.reverse_dependencies,
            other.forward_dependencies,
            &other.package,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationSummary {
    pub sources_requested: usize,
    pub sources_assessed: usize,
    /// Sources with at least one row
    pub sources_blocking: usize,
    pub rows: usize,
}

/// Complete migration report, rows already in report order.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationReport {
    pub generated_at: DateTime<Utc>,
    pub distribution: String,
    pub level: u32,
    pub summary: MigrationSummary,
    pub rows: Vec<MigrationRow>,
    pub warnings: Vec<String>,
}

impl MigrationReport {
    pub fn new(
        distribution: &str,
        level: u32,
        sources_requested: usize,
        sources_assessed: usize,
        mut rows: Vec<MigrationRow>,
        warnings: Vec<String>,
    ) -> Self {
        rows.sort_by(MigrationRow::report_order);
        let mut blocking: Vec<&str> = rows.iter().map(|row| row.source.as_str()).collect();
        blocking.sort_unstable();
        blocking.dedup();

        Self {
            generated_at: Utc::now(),
            distribution: distribution.to_string(),
            level,
            summary: MigrationSummary {
                sources_requested,
                sources_assessed,
                sources_blocking: blocking.len(),
                rows: rows.len(),
            },
            rows,
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(package: &str, source: &str, fdeps: usize, rdeps: usize) -> MigrationRow {
        MigrationRow {
            kind: if package.starts_with("src:") {
                RowKind::Source
            } else {
                RowKind::Binary
            },
            package: package.to_string(),
            source: source.to_string(),
            maintainer: "M <m@example.org>".to_string(),
            forward_dependencies: fdeps,
            reverse_dependencies: rdeps,
            graph_file: None,
        }
    }

    #[test]
    fn test_rows_sorted_by_rdeps_then_fdeps() {
        let report = MigrationReport::new(
            "unstable",
            1,
            2,
            2,
            vec![
                row("python-b", "b", 3, 2),
                row("python-a", "a", 5, 0),
                row("src:a", "a", 2, 0),
                row("python-c", "b", 1, 2),
            ],
            vec![],
        );
        let order: Vec<&str> = report.rows.iter().map(|r| r.package.as_str()).collect();
        assert_eq!(order, vec!["src:a", "python-a", "python-c", "python-b"]);
    }

    #[test]
    fn test_summary_counts_blocking_sources() {
        let report = MigrationReport::new(
            "unstable",
            1,
            3,
            2,
            vec![row("python-b", "b", 3, 2), row("src:b", "b", 1, 0)],
            vec!["c: unknown source package".to_string()],
        );
        assert_eq!(
            report.summary,
            MigrationSummary {
                sources_requested: 3,
                sources_assessed: 2,
                sources_blocking: 1,
                rows: 2,
            }
        );
    }

    #[test]
    fn test_display_name_strips_src_prefix() {
        assert_eq!(row("src:six", "six", 1, 0).display_name(), "six");
        assert_eq!(row("python-six", "six", 1, 0).display_name(), "python-six");
    }

    #[test]
    fn test_row_serialization_skips_missing_graph() {
        let json = serde_json::to_value(row("src:six", "six", 1, 0)).unwrap();
        assert_eq!(json["kind"], "source");
        assert!(json.get("graph_file").is_none());
    }
}
