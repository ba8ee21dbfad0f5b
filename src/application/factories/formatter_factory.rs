use crate::adapters::outbound::formatters::{
    DotFormatter, JsonFormatter, JsonReportFormatter, MarkdownReportFormatter, TextFormatter,
};
use crate::application::dto::{GraphFormat, ReportFormat};
use crate::ports::outbound::{GraphFormatter, ReportFormatter};

/// Factory for creating graph and report formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a graph formatter for the specified output format
    ///
    /// # Examples
    /// ```
    /// use deb_rdeps::application::dto::GraphFormat;
    /// use deb_rdeps::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create_graph(GraphFormat::Dot);
    /// assert_eq!(formatter.file_extension(), "dot");
    /// ```
    pub fn create_graph(format: GraphFormat) -> Box<dyn GraphFormatter> {
        match format {
            GraphFormat::Dot => Box::new(DotFormatter::new()),
            GraphFormat::Text => Box::new(TextFormatter::new()),
            GraphFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Creates a report formatter
    ///
    /// `package_url_template` only affects the Markdown report, whose
    /// package column links to the archive.
    pub fn create_report(format: ReportFormat, package_url_template: Option<&str>) -> Box<dyn ReportFormatter> {
        match format {
            ReportFormat::Markdown => match package_url_template {
                Some(template) => Box::new(MarkdownReportFormatter::with_url_template(template)),
                None => Box::new(MarkdownReportFormatter::new()),
            },
            ReportFormat::Json => Box::new(JsonReportFormatter::new()),
        }
    }

    /// Returns the progress message for the specified graph format
    ///
    /// # Examples
    /// ```
    /// use deb_rdeps::application::dto::GraphFormat;
    /// use deb_rdeps::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(GraphFormat::Dot);
    /// assert_eq!(message, "📝 Generating DOT graph output...");
    /// ```
    pub fn progress_message(format: GraphFormat) -> &'static str {
        match format {
            GraphFormat::Dot => "📝 Generating DOT graph output...",
            GraphFormat::Text => "📝 Generating text dump output...",
            GraphFormat::Json => "📝 Generating JSON graph output...",
        }
    }

    pub fn report_progress_message(format: ReportFormat) -> &'static str {
        match format {
            ReportFormat::Markdown => "📝 Generating Markdown migration report...",
            ReportFormat::Json => "📝 Generating JSON migration report...",
        }
    }
}
