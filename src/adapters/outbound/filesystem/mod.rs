/// Filesystem adapters for file I/O operations
mod edge_file;
mod file_writer;
mod json_file_cache;

pub use edge_file::EdgeFileReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use json_file_cache::{JsonFileCache, DEFAULT_CACHE_FILE};
