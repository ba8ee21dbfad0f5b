use crate::application::read_models::MigrationReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonReportFormatter adapter: the report read model as pretty JSON
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, report: &MigrationReport) -> Result<String> {
        let mut json = serde_json::to_string_pretty(report)?;
        json.push('\n');
        Ok(json)
    }
}
