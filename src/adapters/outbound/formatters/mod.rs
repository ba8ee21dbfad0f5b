/// Formatter adapters for graph and report output
mod dot_formatter;
mod json_formatter;
mod json_report_formatter;
mod markdown_report_formatter;
mod text_formatter;

pub use dot_formatter::DotFormatter;
pub use json_formatter::JsonFormatter;
pub use json_report_formatter::JsonReportFormatter;
pub use markdown_report_formatter::MarkdownReportFormatter;
pub use text_formatter::TextFormatter;
