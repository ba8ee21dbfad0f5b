use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow batch jobs to distinguish between a clean run,
/// a run where some targets could not be processed, and a hard failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every target was processed
    Success = 0,
    /// The run completed but at least one target failed
    PartialFailure = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing snapshot file, bad config, I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::PartialFailure => write!(f, "Partial Failure (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for archive indexing and graph traversal.
///
/// Only the snapshot errors are fatal for a run; package-level errors are
/// caught per target and reported.
#[derive(Debug, Error)]
pub enum RdepsError {
    #[error("Snapshot file not found: {path} ({distribution}/{component})\n\n💡 Hint: Run `apt update` with deb-src entries for '{distribution}', or point --lists-dir at a directory holding the apt lists")]
    MissingSnapshotFile {
        path: PathBuf,
        distribution: String,
        component: String,
    },

    #[error("Failed to parse snapshot file: {path} (line {line})\nDetails: {details}\n\n💡 Hint: The file looks truncated or corrupted; refresh the apt lists")]
    SnapshotParseError {
        path: PathBuf,
        line: usize,
        details: String,
    },

    #[error("Unknown package: {name}")]
    UnknownPackage { name: String },

    #[error("Package has no installable version on this architecture: {name}")]
    VirtualOrForeignArchPackage { name: String },

    #[error("Invalid package name: '{name}'\nReason: {reason}")]
    InvalidPackageName { name: String, reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid output directory: {path}\nReason: {reason}\n\n💡 Hint: Please specify an existing directory with --destdir")]
    InvalidOutputDirectory { path: PathBuf, reason: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}
