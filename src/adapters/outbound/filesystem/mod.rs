/// Filesystem adapters for file I/O operations
mod file_writer;
mod repository_file;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use repository_file::RepositoryFileProvider;
