use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use crate::shared::Result;
use std::path::PathBuf;

/// Presenter type enumeration for factory pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    /// A single named file (`--output`)
    File(PathBuf),
    /// `<destdir>/<name>.<extension>`, one per graph
    Directory {
        destdir: PathBuf,
        name: String,
        extension: String,
    },
}

/// Factory for creating output presenters
///
/// This factory encapsulates the creation logic for different presenter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter instance for the specified type
    ///
    /// # Errors
    /// Returns an error when a `Directory` presenter points at something
    /// that is not a usable directory.
    ///
    /// # Examples
    /// ```
    /// use deb_rdeps::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout).unwrap();
    /// ```
    pub fn create(presenter_type: PresenterType) -> Result<Box<dyn OutputPresenter>> {
        Ok(match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
            PresenterType::Directory {
                destdir,
                name,
                extension,
            } => Box::new(FileSystemWriter::in_directory(&destdir, &name, &extension)?.quiet()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_stdout_presenter() {
        let presenter = PresenterFactory::create(PresenterType::Stdout).unwrap();
        assert!(std::mem::size_of_val(&presenter) > 0);
    }

    #[test]
    fn test_create_directory_presenter_writes_named_file() {
        let dir = TempDir::new().unwrap();
        let presenter = PresenterFactory::create(PresenterType::Directory {
            destdir: dir.path().to_path_buf(),
            name: "libfoo1".to_string(),
            extension: "dot".to_string(),
        })
        .unwrap();

        presenter.present("digraph \"libfoo1\" {\n}\n").unwrap();

        let written = std::fs::read_to_string(dir.path().join("libfoo1.dot")).unwrap();
        assert!(written.starts_with("digraph"));
    }

    #[test]
    fn test_create_directory_presenter_missing_destdir() {
        let result = PresenterFactory::create(PresenterType::Directory {
            destdir: PathBuf::from("/nonexistent/deb-rdeps-out"),
            name: "libfoo1".to_string(),
            extension: "dot".to_string(),
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_presenter_type_equality() {
        let file1 = PresenterType::File(PathBuf::from("/tmp/output1.dot"));
        let file2 = PresenterType::File(PathBuf::from("/tmp/output1.dot"));
        assert_eq!(file1, file2);

        let file3 = PresenterType::File(PathBuf::from("/tmp/output2.dot"));
        assert_ne!(file1, file3);
    }
}
