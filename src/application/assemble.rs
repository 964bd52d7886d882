//! Package assembly
//!
//! Turns a written manifest into the category directory tree, copies the
//! referenced files, the manifest itself and the CICS definitions, then
//! archives the tree.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::config::PackageConfig;
use crate::domain::entities::{Manifest, ManifestEntry};
use crate::domain::ports::{Archiver, FileSystem, PackageEvent, PackageEventSink, PackageKind};
use crate::domain::services::naming;
use crate::domain::value_objects::Category;
use crate::error::{PackError, PackResult};

/// Directory layout of one versioned package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLayout {
    base: PathBuf,
    version: String,
}

impl PackageLayout {
    pub fn new(base: impl Into<PathBuf>, version: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            version: version.into(),
        }
    }

    /// Archive root, e.g. `buildartefacts`
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// `<base>/<version>`
    pub fn version_root(&self) -> PathBuf {
        self.base.join(&self.version)
    }

    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.version_root().join(category.directory_name())
    }

    /// Every directory of the tree, parents first
    pub fn directories(&self) -> Vec<PathBuf> {
        let mut dirs = vec![self.base.clone(), self.version_root()];
        dirs.extend(
            Category::PACKAGE_DIRECTORIES
                .iter()
                .map(|category| self.category_dir(*category)),
        );
        dirs
    }
}

pub struct PackageAssembler<'a, FS: FileSystem> {
    fs: &'a FS,
    archiver: &'a dyn Archiver,
    cics_dir: PathBuf,
    cics_extension: String,
}

impl<'a, FS: FileSystem> PackageAssembler<'a, FS> {
    pub fn new(fs: &'a FS, archiver: &'a dyn Archiver, config: &PackageConfig) -> Self {
        Self {
            fs,
            archiver,
            cics_dir: config.cics_dir.clone(),
            cics_extension: config.cics_extension.clone(),
        }
    }

    /// Assemble the package described by `manifest_path` and archive it next
    /// to the manifest. Returns the archive path.
    pub fn assemble(
        &self,
        manifest_path: &Path,
        repo_root: &Path,
        layout: &PackageLayout,
        events: &dyn PackageEventSink,
    ) -> PackResult<PathBuf> {
        let content = self
            .fs
            .read(manifest_path)
            .inspect_err(|e| error!("{}", e))?;
        let manifest = Manifest::parse(&content, manifest_path).inspect_err(|e| error!("{}", e))?;

        self.create_tree(layout)?;
        events.on_event(PackageEvent::DirectoryTreeCreated {
            kind: PackageKind::Application,
            root: layout.version_root(),
        });

        for entry in manifest.entries() {
            let (from, to) = self.copy_entry(entry, repo_root, layout)?;
            events.on_event(PackageEvent::FileCopied { from, to });
        }
        info!(files = manifest.len(), "copied manifest entries");

        let manifest_name = file_name_of(manifest_path)?;
        let manifest_copy = layout.base().join(&manifest_name);
        self.fs
            .copy_file(manifest_path, &manifest_copy)
            .inspect_err(|e| error!("{}", e))?;
        info!(to = %manifest_copy.display(), "copied manifest into package");
        events.on_event(PackageEvent::ManifestCopied { to: manifest_copy });

        let cics_count = self.copy_cics_files(repo_root, layout)?;
        info!(count = cics_count, "copied CICS definitions");
        events.on_event(PackageEvent::CicsFilesCopied { count: cics_count });

        let archive_dir = manifest_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let archive = archive_dir.join(naming::archive_name_for_manifest(
            &manifest_name,
            self.archiver.format(),
        ));
        let written = self
            .archiver
            .create_archive(layout.base(), &archive)
            .inspect_err(|e| error!("{}", e))?;
        info!(archive = %archive.display(), entries = written, "archived package");
        events.on_event(PackageEvent::Archived {
            kind: PackageKind::Application,
            path: archive.clone(),
        });

        Ok(archive)
    }

    fn create_tree(&self, layout: &PackageLayout) -> PackResult<()> {
        for dir in layout.directories() {
            self.fs.create_dir(&dir).inspect_err(|e| error!("{}", e))?;
            debug!(dir = %dir.display(), "directory ready");
        }
        Ok(())
    }

    fn copy_entry(
        &self,
        entry: &ManifestEntry,
        repo_root: &Path,
        layout: &PackageLayout,
    ) -> PackResult<(PathBuf, PathBuf)> {
        let from = if entry.category().resolves_from_repository() {
            repo_root.join(entry.source_path())
        } else {
            entry.source_path().to_path_buf()
        };
        let to = layout
            .category_dir(entry.category())
            .join(entry.display_name());

        self.fs
            .copy_file(&from, &to)
            .inspect_err(|e| error!("{}", e))?;
        debug!(from = %from.display(), to = %to.display(), "copied file");
        Ok((from, to))
    }

    fn copy_cics_files(&self, repo_root: &Path, layout: &PackageLayout) -> PackResult<usize> {
        let source_dir = repo_root.join(&self.cics_dir);
        let files = self
            .fs
            .list_files_with_extension(&source_dir, &self.cics_extension)
            .inspect_err(|e| error!("{}", e))?;
        let target_dir = layout.category_dir(Category::Cics);

        for file in &files {
            let to = target_dir.join(file_name_of(file)?);
            self.fs
                .copy_file(file, &to)
                .inspect_err(|e| error!("{}", e))?;
            debug!(from = %file.display(), to = %to.display(), "copied CICS definition");
        }
        Ok(files.len())
    }
}

fn file_name_of(path: &Path) -> PackResult<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            PackError::io(
                "resolve file name of",
                path,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
            )
        })
}
