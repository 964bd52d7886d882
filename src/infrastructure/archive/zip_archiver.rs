//! Zip archive writer

use std::fs::File;
use std::io;
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use super::{archive_error, collect_entries};
use crate::domain::ports::Archiver;
use crate::domain::value_objects::ArchiveFormat;
use crate::error::PackResult;

/// Writes deflate-compressed zip archives
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipArchiver;

impl Archiver for ZipArchiver {
    fn format(&self) -> ArchiveFormat {
        ArchiveFormat::Zip
    }

    fn create_archive(&self, source_root: &Path, destination: &Path) -> PackResult<usize> {
        let entries = collect_entries(source_root, destination)?;
        let file = File::create(destination).map_err(|e| archive_error(destination, e))?;
        let mut zip = ZipWriter::new(file);

        // 1980-01-01, the earliest zip timestamp
        let fixed_time = DateTime::default();
        let file_options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(fixed_time)
            .unix_permissions(0o644);
        let dir_options = file_options.unix_permissions(0o755);

        for entry in &entries {
            if entry.is_dir {
                zip.add_directory(entry.name.clone(), dir_options)
                    .map_err(|e| archive_error(destination, e))?;
                continue;
            }

            zip.start_file(entry.name.clone(), file_options)
                .map_err(|e| archive_error(destination, e))?;
            let mut source = File::open(&entry.path).map_err(|e| archive_error(&entry.path, e))?;
            io::copy(&mut source, &mut zip).map_err(|e| archive_error(destination, e))?;
        }

        zip.finish().map_err(|e| archive_error(destination, e))?;
        Ok(entries.len())
    }
}
