mod error;
pub mod utils;

pub use error::{ErrorKind, FsError};

use crate::DirEntry;

pub type Result<T> = std::result::Result<T, FsError>;

/// Path-based operations over a hierarchical namespace.
///
/// All paths are absolute: they start with `/` and consist of components made of
/// lowercase ASCII letters and `.` (see [`utils::split_path`]).
pub trait FsBackend {
    /// Lists a directory's children in ascending order, or a file's own name.
    fn ls(&self, path: &str) -> Result<Vec<String>>;

    /// Creates directory and all its missing parents.
    fn mkdir(&mut self, path: &str) -> Result<()>;

    /// Appends `content` to the file at `path`, creating it (and its parents) if needed.
    fn add_content_to_file(&mut self, path: &str, content: &str) -> Result<()>;

    /// Returns the whole content of the file at `path`.
    fn read_content_from_file(&self, path: &str) -> Result<String>;

    fn exists(&self, path: &str) -> bool;
    fn is_file(&self, path: &str) -> bool;
    fn is_dir(&self, path: &str) -> bool;

    /// Recursive listing of everything below `path`, in `ls` order.
    fn tree(&self, path: &str) -> Result<Vec<DirEntry>>;
}
