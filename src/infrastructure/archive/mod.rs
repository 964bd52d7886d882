//! Archive Implementations
//!
//! Concrete implementations of the Archiver port. Every writer walks the
//! source tree in sorted order and pins timestamps and permissions, so the
//! same tree always produces the same archive bytes.

mod tar_archiver;
mod zip_archiver;

use std::fmt::Display;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::ports::Archiver;
use crate::domain::value_objects::ArchiveFormat;
use crate::error::{PackError, PackResult};

pub use tar_archiver::TarArchiver;
pub use zip_archiver::ZipArchiver;

/// Get the archiver for a format
pub fn archiver_for(format: ArchiveFormat) -> Box<dyn Archiver> {
    match format {
        ArchiveFormat::Zip => Box::new(ZipArchiver),
        ArchiveFormat::Tar => Box::new(TarArchiver::plain()),
        ArchiveFormat::TarGz => Box::new(TarArchiver::gzip()),
    }
}

/// One file or directory below the archive root
#[derive(Debug, Clone)]
pub(crate) struct ArchiveEntry {
    /// Path inside the archive, `/`-separated
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Walk `root` in sorted order. The root itself is not an entry.
pub(crate) fn collect_entries(root: &Path, destination: &Path) -> PackResult<Vec<ArchiveEntry>> {
    if !root.is_dir() {
        return Err(archive_error(
            destination,
            format!("source directory {} not found", root.display()),
        ));
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(true)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut entries = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| archive_error(destination, e))?;
        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| archive_error(destination, e))?;
        if relative.as_os_str().is_empty() || entry.path() == destination {
            continue;
        }

        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
        entries.push(ArchiveEntry {
            name,
            path: entry.path().to_path_buf(),
            is_dir,
        });
    }
    Ok(entries)
}

pub(crate) fn archive_error(path: &Path, err: impl Display) -> PackError {
    PackError::Archive {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
