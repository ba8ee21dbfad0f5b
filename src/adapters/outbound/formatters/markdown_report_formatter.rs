use crate::application::read_models::{MigrationReport, MigrationRow, RowKind};
use crate::archive::services::DEFAULT_PACKAGE_URL_TEMPLATE;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

const TABLE_HEADER: &str = "| Package | Maintainer | # deps | # rdeps | Rdeps graph |\n";

const TABLE_SEPARATOR: &str = "|---------|------------|--------|---------|-------------|\n";

/// MarkdownReportFormatter adapter for the migration assessment
///
/// Renders the rows as a table, linking binaries to their package page and
/// sources to their source page.
pub struct MarkdownReportFormatter {
    package_url_template: String,
}

impl MarkdownReportFormatter {
    pub fn new() -> Self {
        Self::with_url_template(DEFAULT_PACKAGE_URL_TEMPLATE)
    }

    pub fn with_url_template(template: &str) -> Self {
        Self {
            package_url_template: template.to_string(),
        }
    }

    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn package_link(&self, row: &MigrationRow, distribution: &str) -> String {
        let name = row.display_name();
        let package = match row.kind {
            RowKind::Source => format!("source/{}", name),
            RowKind::Binary => name.to_string(),
        };
        let url = self
            .package_url_template
            .replace("{distribution}", &urlencoding::encode(distribution))
            .replace("{package}", &package);
        format!("[{}]({})", Self::escape_markdown_table_cell(&row.package), url)
    }

    fn graph_cell(row: &MigrationRow) -> String {
        match (row.kind, &row.graph_file) {
            (RowKind::Source, _) => "no graph for source packages".to_string(),
            (RowKind::Binary, Some(file)) => format!("[graph]({})", file),
            (RowKind::Binary, None) if row.reverse_dependencies == 0 => "no rdeps".to_string(),
            (RowKind::Binary, None) => String::new(),
        }
    }
}

impl Default for MarkdownReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownReportFormatter {
    fn format(&self, report: &MigrationReport) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "# Migration progress ({})", report.distribution)?;
        writeln!(out)?;
        writeln!(
            out,
            "Document generated on {}.",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(out)?;

        let summary = &report.summary;
        writeln!(
            out,
            "Source packages requested: {} (assessed: {}, still blocking: {}).",
            summary.sources_requested, summary.sources_assessed, summary.sources_blocking
        )?;
        writeln!(
            out,
            "Reverse dependencies counted up to level {}.",
            report.level
        )?;
        writeln!(out)?;
        writeln!(out, "Total entries below: {}", summary.rows)?;
        writeln!(out)?;

        out.push_str(TABLE_HEADER);
        out.push_str(TABLE_SEPARATOR);
        for row in &report.rows {
            writeln!(
                out,
                "| {} | {} | {} | {} | {} |",
                self.package_link(row, &report.distribution),
                Self::escape_markdown_table_cell(&row.maintainer),
                row.forward_dependencies,
                row.reverse_dependencies,
                Self::graph_cell(row)
            )?;
        }

        if !report.warnings.is_empty() {
            writeln!(out)?;
            writeln!(out, "## Warnings")?;
            writeln!(out)?;
            for warning in &report.warnings {
                writeln!(out, "- {}", Self::escape_markdown_table_cell(warning))?;
            }
        }

        Ok(out)
    }
}
