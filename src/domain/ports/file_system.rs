//! FileSystem port - abstraction over the file operations packaging needs
//!
//! This trait allows the application layer to build packages without
//! depending on a concrete implementation.

use std::path::{Path, PathBuf};

use crate::error::PackResult;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> PackResult<String>;

    /// Write content to file, replacing it atomically
    fn write(&self, path: &Path, content: &str) -> PackResult<()>;

    /// Create a single directory; an existing directory is not an error
    fn create_dir(&self, path: &Path) -> PackResult<()>;

    /// Copy one file, overwriting the destination
    fn copy_file(&self, from: &Path, to: &Path) -> PackResult<()>;

    /// Recursively copy a directory into a destination that must not exist.
    /// Returns the number of files copied.
    fn copy_tree(&self, from: &Path, to: &Path) -> PackResult<usize>;

    /// Regular, non-hidden files directly inside `dir` whose name ends in
    /// `.<extension>`, in directory-listing order. A missing directory yields
    /// an empty list.
    fn list_files_with_extension(&self, dir: &Path, extension: &str) -> PackResult<Vec<PathBuf>>;
}
