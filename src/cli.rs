use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::{GraphFormat, ReportFormat};

/// Reverse-dependency graphs over Debian archive metadata
#[derive(Parser, Debug)]
#[command(name = "deb-rdeps")]
#[command(version)]
#[command(
    about = "Show which packages still depend on a Debian package, directly or transitively",
    long_about = None
)]
pub struct Args {
    /// Binary package names to graph (source package names with --report)
    #[arg(value_name = "PKGS", required = true, num_args = 1..)]
    pub pkgs: Vec<String>,

    /// Maximum reverse-dependency depth [default: 2, or 1 with --report]
    #[arg(short, long, value_name = "N")]
    pub level: Option<u32>,

    /// Print a text dump of the edges instead of a graph (same as --format text)
    #[arg(short, long)]
    pub text: bool,

    /// Graph output format: dot, text or json [default: dot]
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<GraphFormat>,

    /// Output file path, only valid with a single package (stdout if not specified)
    #[arg(short, long, value_name = "FILE", conflicts_with = "destdir")]
    pub output: Option<PathBuf>,

    /// Write one file per package into this directory (<pkg>.dot, .txt or .json)
    #[arg(short, long, value_name = "DIR")]
    pub destdir: Option<PathBuf>,

    /// Number of packages processed in parallel [default: available CPUs]
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Directory holding the apt lists [default: /var/lib/apt/lists]
    #[arg(long, value_name = "DIR")]
    pub lists_dir: Option<PathBuf>,

    /// Mirror prefix of the apt list file names [default: ftp.debian.org_debian]
    #[arg(long, value_name = "PREFIX")]
    pub mirror: Option<String>,

    /// Distribution to analyse [default: unstable]
    #[arg(long, value_name = "DIST")]
    pub distribution: Option<String>,

    /// Distribution packages are compared against when coloring nodes [default: testing]
    #[arg(long, value_name = "DIST", conflicts_with = "no_reference")]
    pub reference: Option<String>,

    /// Do not compare against a reference distribution
    #[arg(long)]
    pub no_reference: bool,

    /// Architecture of the binary package indexes [default: amd64]
    #[arg(long, value_name = "ARCH")]
    pub arch: Option<String>,

    /// Path to config file (default: auto-discover deb-rdeps.config.yml in current directory)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Treat PKGS as source packages and print the migration report
    #[arg(long)]
    pub report: bool,

    /// Migration report format: markdown or json
    #[arg(long, value_name = "FORMAT", default_value = "markdown", requires = "report")]
    pub report_format: ReportFormat,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// `--text` wins over `--format`; `None` when neither was given.
    pub fn graph_format(&self) -> Option<GraphFormat> {
        if self.text {
            Some(GraphFormat::Text)
        } else {
            self.format
        }
    }
}
