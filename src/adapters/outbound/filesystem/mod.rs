/// Filesystem adapters for apt lists and output files
mod file_reader;
mod file_writer;

pub use file_reader::{FileSystemReader, DEFAULT_LISTS_DIR, DEFAULT_MIRROR};
pub use file_writer::{FileSystemWriter, StdoutPresenter};
