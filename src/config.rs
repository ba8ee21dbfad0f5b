//! Configuration file support for deb-rdeps.
//!
//! Provides YAML-based configuration through `deb-rdeps.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line options.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::adapters::outbound::filesystem::{DEFAULT_LISTS_DIR, DEFAULT_MIRROR};
use crate::application::dto::{GraphFormat, DEFAULT_LEVEL, DEFAULT_REPORT_LEVEL};
use crate::archive::domain::Snapshot;
use crate::archive::policies::ObsoleteDependencyPolicy;
use crate::archive::services::DEFAULT_PACKAGE_URL_TEMPLATE;
use crate::cli::Args;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "deb-rdeps.config.yml";

const DEFAULT_DISTRIBUTION: &str = "unstable";
const DEFAULT_REFERENCE: &str = "testing";
const DEFAULT_COMPONENTS: [&str; 3] = ["main", "contrib", "non-free"];
const DEFAULT_ARCHITECTURE: &str = "amd64";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub lists_dir: Option<PathBuf>,
    pub mirror: Option<String>,
    pub distribution: Option<String>,
    /// An empty string disables the comparison.
    pub reference_distribution: Option<String>,
    pub components: Option<Vec<String>>,
    pub architecture: Option<String>,
    pub format: Option<String>,
    pub level: Option<u32>,
    pub jobs: Option<usize>,
    pub package_url_template: Option<String>,
    pub obsolete_dependencies: Option<ObsoleteDependencyPolicy>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.jobs == Some(0) {
        bail!(
            "Invalid config: jobs must be at least 1.\n\n\
             💡 Hint: Remove the 'jobs' field to use every available CPU."
        );
    }
    if let Some(ref components) = config.components {
        if components.is_empty() || components.iter().any(|c| c.trim().is_empty()) {
            bail!(
                "Invalid config: components must be a non-empty list of component names.\n\n\
                 💡 Hint: For example: components: [main, contrib, non-free]"
            );
        }
    }
    if let Some(ref template) = config.package_url_template {
        if !template.contains("{package}") {
            bail!(
                "Invalid config: package_url_template must contain '{{package}}'.\n\n\
                 💡 Hint: For example: https://packages.debian.org/{{distribution}}/{{package}}"
            );
        }
    }
    if let Some(ref format) = config.format {
        if let Err(e) = format.parse::<GraphFormat>() {
            bail!("Invalid config: {}", e);
        }
    }
    if let Some(ref policy) = config.obsolete_dependencies {
        if policy.is_empty() {
            bail!(
                "Invalid config: obsolete_dependencies matches no package.\n\n\
                 💡 Hint: Give at least one entry in 'names' or 'prefixes'."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Options for one run after merging CLI > config file > defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub lists_dir: PathBuf,
    pub mirror: String,
    pub snapshot: Snapshot,
    pub reference_distribution: Option<String>,
    pub format: GraphFormat,
    pub level: u32,
    pub jobs: usize,
    pub package_url_template: String,
    pub policy: ObsoleteDependencyPolicy,
}

impl Settings {
    pub fn resolve(args: &Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let format = match (args.graph_format(), config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(name)) => name.parse::<GraphFormat>().map_err(anyhow::Error::msg)?,
            (None, None) => GraphFormat::default(),
        };

        let default_level = if args.report {
            DEFAULT_REPORT_LEVEL
        } else {
            DEFAULT_LEVEL
        };

        let reference_distribution = if args.no_reference {
            None
        } else {
            match args.reference.clone().or(config.reference_distribution) {
                Some(dist) if dist.trim().is_empty() => None,
                Some(dist) => Some(dist),
                None => Some(DEFAULT_REFERENCE.to_string()),
            }
        };

        let components = config
            .components
            .unwrap_or_else(|| DEFAULT_COMPONENTS.iter().map(|c| c.to_string()).collect());
        let distribution = args
            .distribution
            .clone()
            .or(config.distribution)
            .unwrap_or_else(|| DEFAULT_DISTRIBUTION.to_string());
        let architecture = args
            .arch
            .clone()
            .or(config.architecture)
            .unwrap_or_else(|| DEFAULT_ARCHITECTURE.to_string());

        Ok(Self {
            lists_dir: args
                .lists_dir
                .clone()
                .or(config.lists_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LISTS_DIR)),
            mirror: args
                .mirror
                .clone()
                .or(config.mirror)
                .unwrap_or_else(|| DEFAULT_MIRROR.to_string()),
            snapshot: Snapshot::new(&distribution, &components, &architecture),
            reference_distribution,
            format,
            level: args.level.or(config.level).unwrap_or(default_level),
            jobs: args.jobs.or(config.jobs).unwrap_or_else(available_jobs).max(1),
            package_url_template: config
                .package_url_template
                .unwrap_or_else(|| DEFAULT_PACKAGE_URL_TEMPLATE.to_string()),
            policy: config.obsolete_dependencies.unwrap_or_default(),
        })
    }
}

fn available_jobs() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn args(argv: &[&str]) -> Args {
        let mut full = vec!["deb-rdeps"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
lists_dir: /srv/lists
mirror: deb.debian.org_debian
distribution: experimental
reference_distribution: unstable
components: [main]
architecture: arm64
format: text
level: 3
jobs: 2
package_url_template: "https://tracker.debian.org/pkg/{package}"
obsolete_dependencies:
  names: [perl4]
  prefixes: [libperl4-]
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.lists_dir, Some(PathBuf::from("/srv/lists")));
        assert_eq!(config.mirror.as_deref(), Some("deb.debian.org_debian"));
        assert_eq!(config.distribution.as_deref(), Some("experimental"));
        assert_eq!(config.reference_distribution.as_deref(), Some("unstable"));
        assert_eq!(config.components, Some(vec!["main".to_string()]));
        assert_eq!(config.architecture.as_deref(), Some("arm64"));
        assert_eq!(config.level, Some(3));
        assert_eq!(config.jobs, Some(2));
        let policy = config.obsolete_dependencies.unwrap();
        assert!(policy.is_obsolete("libperl4-foo"));
        assert!(!policy.is_obsolete("python-six"));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "level: 4\n").unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert_eq!(config.unwrap().level, Some(4));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_negative_level_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "level: -1\n").unwrap();

        assert!(load_config_from_path(&config_path).is_err());
    }

    #[test]
    fn test_zero_jobs_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "jobs: 0\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("jobs must be at least 1"));
    }

    #[test]
    fn test_template_without_package_placeholder() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "package_url_template: https://example.org/\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("must contain '{package}'"));
    }

    #[test]
    fn test_empty_components_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "components: []\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("components must be a non-empty list"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "level: 1\nbug_tracker: true\nusertags: py2\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("bug_tracker"));
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::resolve(&args(&["libfoo1"]), None).unwrap();
        assert_eq!(settings.lists_dir, PathBuf::from("/var/lib/apt/lists"));
        assert_eq!(settings.mirror, "ftp.debian.org_debian");
        assert_eq!(settings.snapshot.distribution, "unstable");
        assert_eq!(settings.snapshot.components, vec!["main", "contrib", "non-free"]);
        assert_eq!(settings.snapshot.architecture, "amd64");
        assert_eq!(settings.reference_distribution.as_deref(), Some("testing"));
        assert_eq!(settings.format, GraphFormat::Dot);
        assert_eq!(settings.level, 2);
        assert!(settings.jobs >= 1);
        assert_eq!(settings.policy, ObsoleteDependencyPolicy::default());
    }

    #[test]
    fn test_report_mode_defaults_to_level_one() {
        let settings = Settings::resolve(&args(&["--report", "six"]), None).unwrap();
        assert_eq!(settings.level, 1);
    }

    #[test]
    fn test_cli_overrides_config() {
        let config = ConfigFile {
            distribution: Some("experimental".to_string()),
            level: Some(5),
            jobs: Some(8),
            format: Some("json".to_string()),
            ..Default::default()
        };
        let settings = Settings::resolve(
            &args(&["-l", "1", "--distribution", "sid", "-t", "libfoo1"]),
            Some(config),
        )
        .unwrap();
        assert_eq!(settings.level, 1);
        assert_eq!(settings.snapshot.distribution, "sid");
        assert_eq!(settings.format, GraphFormat::Text);
        assert_eq!(settings.jobs, 8);
    }

    #[test]
    fn test_reference_can_be_disabled() {
        let settings = Settings::resolve(&args(&["--no-reference", "libfoo1"]), None).unwrap();
        assert!(settings.reference_distribution.is_none());

        let config = ConfigFile {
            reference_distribution: Some(String::new()),
            ..Default::default()
        };
        let settings = Settings::resolve(&args(&["libfoo1"]), Some(config)).unwrap();
        assert!(settings.reference_distribution.is_none());
    }
}
