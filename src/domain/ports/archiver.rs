//! Archiver port - turns an assembled directory into one archive file

use std::path::Path;

use crate::domain::value_objects::ArchiveFormat;
use crate::error::PackResult;

/// Produces an archive whose entries are relative to `source_root`
pub trait Archiver {
    fn format(&self) -> ArchiveFormat;

    /// Archive everything under `source_root` into `destination`.
    /// Returns the number of entries written.
    fn create_archive(&self, source_root: &Path, destination: &Path) -> PackResult<usize>;
}
