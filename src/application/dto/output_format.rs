/// Output formats for graphs and reports
///
/// Both the CLI and the formatter factory need these, so they live in the
/// application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphFormat {
    /// Graphviz DOT (default)
    #[default]
    Dot,
    /// Plain text edge dump
    Text,
    Json,
}

impl std::str::FromStr for GraphFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dot" | "graphviz" => Ok(GraphFormat::Dot),
            "text" | "txt" => Ok(GraphFormat::Text),
            "json" => Ok(GraphFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'dot', 'text' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphFormat::Dot => write!(f, "dot"),
            GraphFormat::Text => write!(f, "text"),
            GraphFormat::Json => write!(f, "json"),
        }
    }
}

/// Output formats for the migration report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!(
                "Invalid report format: {}. Please specify 'markdown' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Markdown => write!(f, "markdown"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}
