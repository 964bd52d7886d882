//! Package Use Case
//!
//! Dispatches on the package type:
//! - `APP`: resolve change set, write manifest, assemble and archive
//! - `SYS`: copy the load directory wholesale and archive it
//! - anything else: nothing happens

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::info;

use crate::config::Config;
use crate::domain::ports::{Archiver, FileSystem, PackageEvent, PackageEventSink, VersionControl};
use crate::domain::services::naming;
use crate::domain::value_objects::PackageType;
use crate::error::PackResult;

use super::assemble::{PackageAssembler, PackageLayout};
use super::manifest::ManifestWriter;
use super::resolve::ChangeSetResolver;
use super::system::SystemPackager;

/// The five positional arguments of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRequest {
    pub load_dir: PathBuf,
    pub repo_dir: PathBuf,
    pub branch: String,
    pub version: String,
    pub package_type: String,
}

/// What a run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageOutcome {
    Application { manifest: PathBuf, archive: PathBuf },
    System { archive: PathBuf },
    Skipped { package_type: String },
}

pub struct PackageUseCase<'a, V, FS>
where
    V: VersionControl,
    FS: FileSystem,
{
    vcs: &'a V,
    fs: &'a FS,
    archiver: &'a dyn Archiver,
    config: &'a Config,
    work_dir: PathBuf,
}

impl<'a, V, FS> PackageUseCase<'a, V, FS>
where
    V: VersionControl,
    FS: FileSystem,
{
    pub fn new(
        vcs: &'a V,
        fs: &'a FS,
        archiver: &'a dyn Archiver,
        config: &'a Config,
        work_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            vcs,
            fs,
            archiver,
            config,
            work_dir: work_dir.into(),
        }
    }

    /// Run one packaging request. `now` stamps the manifest and archive names.
    pub fn execute(
        &self,
        request: &PackageRequest,
        now: NaiveDateTime,
        events: &dyn PackageEventSink,
    ) -> PackResult<PackageOutcome> {
        info!(
            load_dir = %request.load_dir.display(),
            repo = %request.repo_dir.display(),
            branch = %request.branch,
            version = %request.version,
            package_type = %request.package_type,
            "packaging request"
        );

        match PackageType::parse(&request.package_type) {
            Some(PackageType::App) => self.application(request, now, events),
            Some(PackageType::Sys) => self.system(request, now, events),
            None => {
                info!(package_type = %request.package_type, "unknown package type, nothing to do");
                events.on_event(PackageEvent::Skipped {
                    package_type: request.package_type.clone(),
                });
                Ok(PackageOutcome::Skipped {
                    package_type: request.package_type.clone(),
                })
            }
        }
    }

    fn application(
        &self,
        request: &PackageRequest,
        now: NaiveDateTime,
        events: &dyn PackageEventSink,
    ) -> PackResult<PackageOutcome> {
        let change_set = ChangeSetResolver::new(self.vcs, &self.config.version_control).resolve(
            &request.branch,
            &request.version,
            events,
        )?;

        let manifest_path = self
            .work_dir
            .join(naming::manifest_file_name(&request.version, now));
        ManifestWriter::new(self.fs, &self.config.manifest).write(
            &self.absolute(&request.load_dir),
            &change_set,
            &manifest_path,
            events,
        )?;

        let layout = PackageLayout::new(
            self.absolute(&self.config.package.app_root),
            request.version.as_str(),
        );
        let archive = PackageAssembler::new(self.fs, self.archiver, &self.config.package)
            .assemble(
                &manifest_path,
                &self.absolute(&request.repo_dir),
                &layout,
                events,
            )?;

        Ok(PackageOutcome::Application {
            manifest: manifest_path,
            archive,
        })
    }

    fn system(
        &self,
        request: &PackageRequest,
        now: NaiveDateTime,
        events: &dyn PackageEventSink,
    ) -> PackResult<PackageOutcome> {
        let layout = PackageLayout::new(
            self.absolute(&self.config.package.system_root),
            request.version.as_str(),
        );
        let archive = SystemPackager::new(self.fs, self.archiver).package(
            &self.absolute(&request.load_dir),
            &layout,
            &request.version,
            &self.work_dir,
            now,
            events,
        )?;

        Ok(PackageOutcome::System { archive })
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        self.work_dir.join(path)
    }
}
