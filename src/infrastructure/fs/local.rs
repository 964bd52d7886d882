//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tempfile::NamedTempFile;

use crate::domain::ports::file_system::FileSystem;
use crate::error::{PackError, PackResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> PackResult<String> {
        fs::read_to_string(path).map_err(|e| PackError::io("read", path, e))
    }

    fn write(&self, path: &Path, content: &str) -> PackResult<()> {
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).map_err(|e| PackError::io("create directory", parent, e))?;

        let mut temp = NamedTempFile::new_in(parent)
            .map_err(|e| PackError::io("create temporary file in", parent, e))?;
        temp.write_all(content.as_bytes())
            .map_err(|e| PackError::io("write", temp.path(), e))?;
        temp.persist(path)
            .map_err(|e| PackError::io("write", path, e.error))?;
        Ok(())
    }

    fn create_dir(&self, path: &Path) -> PackResult<()> {
        match fs::create_dir(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(PackError::io("create directory", path, e)),
        }
    }

    fn copy_file(&self, from: &Path, to: &Path) -> PackResult<()> {
        fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| PackError::io("copy", from, e))
    }

    fn copy_tree(&self, from: &Path, to: &Path) -> PackResult<usize> {
        if to.exists() {
            return Err(PackError::DestinationExists {
                path: to.to_path_buf(),
            });
        }
        if !from.is_dir() {
            return Err(PackError::io(
                "copy",
                from,
                io::Error::new(io::ErrorKind::NotFound, "source directory not found"),
            ));
        }

        let mut copied = 0;
        let walker = WalkBuilder::new(from)
            .standard_filters(false)
            .follow_links(true)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        for entry in walker {
            let entry = entry.map_err(|e| PackError::io("walk", from, io::Error::other(e.to_string())))?;
            let relative = entry
                .path()
                .strip_prefix(from)
                .map_err(|e| PackError::io("walk", entry.path(), io::Error::other(e.to_string())))?;
            let target = to.join(relative);

            match entry.file_type() {
                Some(file_type) if file_type.is_dir() => {
                    fs::create_dir_all(&target)
                        .map_err(|e| PackError::io("create directory", &target, e))?;
                }
                Some(_) => {
                    self.copy_file(entry.path(), &target)?;
                    copied += 1;
                }
                None => {}
            }
        }

        Ok(copied)
    }

    fn list_files_with_extension(&self, dir: &Path, extension: &str) -> PackResult<Vec<PathBuf>> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(PackError::io("list", dir, e)),
        };

        let suffix = format!(".{}", extension);
        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| PackError::io("list", dir, e))?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with('.') || !name.ends_with(&suffix) {
                continue;
            }
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            }
        }
        Ok(files)
    }
}
