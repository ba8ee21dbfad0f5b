use crate::ports::outbound::OutputPresenter;
use crate::shared::error::RdepsError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing output to files
///
/// This adapter implements the OutputPresenter port for file output.
pub struct FileSystemWriter {
    output_path: PathBuf,
    quiet: bool,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self {
            output_path,
            quiet: false,
        }
    }

    /// Writes `<destdir>/<name>.<extension>`.
    ///
    /// # Errors
    /// Returns `InvalidOutputDirectory` if `destdir` is not an existing directory
    pub fn in_directory(destdir: &Path, name: &str, extension: &str) -> Result<Self> {
        if !destdir.is_dir() {
            return Err(RdepsError::InvalidOutputDirectory {
                path: destdir.to_path_buf(),
                reason: "not an existing directory".to_string(),
            }
            .into());
        }
        Ok(Self::new(destdir.join(format!("{}.{}", name, extension))))
    }

    /// Suppresses the confirmation line on stderr.
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(RdepsError::FileWriteError {
                    path: self.output_path.clone(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Refuses to write through an existing symbolic link.
    fn validate_output_security(&self) -> Result<()> {
        if fs::symlink_metadata(&self.output_path).is_ok() {
            validate_not_symlink(&self.output_path, "write").map_err(|e| RdepsError::FileWriteError {
                path: self.output_path.clone(),
                details: e.to_string(),
            })?;
        }
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_parent_directory()?;
        self.validate_output_security()?;

        fs::write(&self.output_path, content).map_err(|e| RdepsError::FileWriteError {
            path: self.output_path.clone(),
            details: e.to_string(),
        })?;

        if !self.quiet {
            eprintln!("✅ Output complete: {}", self.output_path.display());
        }
        Ok(())
    }
}

/// StdoutPresenter adapter for writing output to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
