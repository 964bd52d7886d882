//! System packages: a whole directory copied into a versioned tree and
//! archived, without any manifest.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::{error, info};

use crate::domain::ports::{Archiver, FileSystem, PackageEvent, PackageEventSink, PackageKind};
use crate::domain::services::naming;
use crate::error::PackResult;

use super::assemble::PackageLayout;

pub struct SystemPackager<'a, FS: FileSystem> {
    fs: &'a FS,
    archiver: &'a dyn Archiver,
}

impl<'a, FS: FileSystem> SystemPackager<'a, FS> {
    pub fn new(fs: &'a FS, archiver: &'a dyn Archiver) -> Self {
        Self { fs, archiver }
    }

    /// Copy `source_dir` to `<base>/<version>` (which must not exist yet) and
    /// archive `<base>` into `archive_dir`.
    pub fn package(
        &self,
        source_dir: &Path,
        layout: &PackageLayout,
        version: &str,
        archive_dir: &Path,
        at: NaiveDateTime,
        events: &dyn PackageEventSink,
    ) -> PackResult<PathBuf> {
        let target = layout.version_root();
        let copied = self
            .fs
            .copy_tree(source_dir, &target)
            .inspect_err(|e| error!("{}", e))?;
        info!(
            from = %source_dir.display(),
            to = %target.display(),
            files = copied,
            "copied system tree"
        );
        events.on_event(PackageEvent::DirectoryTreeCreated {
            kind: PackageKind::System,
            root: target,
        });

        let archive = archive_dir.join(naming::system_archive_name(
            version,
            at,
            self.archiver.format(),
        ));
        let written = self
            .archiver
            .create_archive(layout.base(), &archive)
            .inspect_err(|e| error!("{}", e))?;
        info!(archive = %archive.display(), entries = written, "archived system package");
        events.on_event(PackageEvent::Archived {
            kind: PackageKind::System,
            path: archive.clone(),
        });

        Ok(archive)
    }
}
