//! Tar and tar.gz archive writer

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use flate2::{Compression, GzBuilder};
use tar::{Builder, HeaderMode};

use super::{archive_error, collect_entries, ArchiveEntry};
use crate::domain::ports::Archiver;
use crate::domain::value_objects::ArchiveFormat;
use crate::error::PackResult;

/// Writes plain or gzip-compressed tar archives
#[derive(Debug, Clone, Copy)]
pub struct TarArchiver {
    gzip: bool,
}

impl TarArchiver {
    pub fn plain() -> Self {
        Self { gzip: false }
    }

    pub fn gzip() -> Self {
        Self { gzip: true }
    }
}

fn deterministic_builder<W: Write>(writer: W) -> Builder<W> {
    let mut builder = Builder::new(writer);
    builder.mode(HeaderMode::Deterministic);
    builder
}

fn append_entries<W: Write>(builder: &mut Builder<W>, entries: &[ArchiveEntry]) -> io::Result<()> {
    for entry in entries {
        if entry.is_dir {
            builder.append_dir(&entry.name, &entry.path)?;
        } else {
            builder.append_path_with_name(&entry.path, &entry.name)?;
        }
    }
    Ok(())
}

impl Archiver for TarArchiver {
    fn format(&self) -> ArchiveFormat {
        if self.gzip {
            ArchiveFormat::TarGz
        } else {
            ArchiveFormat::Tar
        }
    }

    fn create_archive(&self, source_root: &Path, destination: &Path) -> PackResult<usize> {
        let entries = collect_entries(source_root, destination)?;
        let file = File::create(destination).map_err(|e| archive_error(destination, e))?;

        if self.gzip {
            let encoder = GzBuilder::new()
                .mtime(0)
                .operating_system(255)
                .write(file, Compression::best());
            let mut builder = deterministic_builder(encoder);
            append_entries(&mut builder, &entries).map_err(|e| archive_error(destination, e))?;
            builder
                .into_inner()
                .and_then(|encoder| encoder.finish())
                .map_err(|e| archive_error(destination, e))?;
        } else {
            let mut builder = deterministic_builder(file);
            append_entries(&mut builder, &entries).map_err(|e| archive_error(destination, e))?;
            builder
                .into_inner()
                .and_then(|mut file| file.flush())
                .map_err(|e| archive_error(destination, e))?;
        }

        Ok(entries.len())
    }
}
