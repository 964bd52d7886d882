//! Manifest stage
//!
//! Scans the load directory, classifies artifacts against the change set and
//! writes the manifest file into the working directory.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::config::ManifestConfig;
use crate::domain::entities::{ChangeSet, Manifest};
use crate::domain::ports::{FileSystem, PackageEvent, PackageEventSink};
use crate::domain::services::{ChangeMatcher, ManifestBuilder};
use crate::domain::value_objects::Category;
use crate::error::PackResult;

pub struct ManifestWriter<'a, FS: FileSystem> {
    fs: &'a FS,
    builder: ManifestBuilder,
    load_extension: String,
    module_extension: String,
}

impl<'a, FS: FileSystem> ManifestWriter<'a, FS> {
    pub fn new(fs: &'a FS, config: &ManifestConfig) -> Self {
        Self {
            fs,
            builder: ManifestBuilder::new(
                ChangeMatcher::new(config.match_policy),
                config.markers(),
            ),
            load_extension: config.load_extension().to_string(),
            module_extension: config.module_extension.clone(),
        }
    }

    /// Classify the artifacts in `load_dir` without writing anything
    pub fn build(&self, load_dir: &Path, change_set: &ChangeSet) -> PackResult<Manifest> {
        let load_modules = self
            .fs
            .list_files_with_extension(load_dir, &self.load_extension)
            .inspect_err(|e| error!("{}", e))?;
        let modules = self
            .fs
            .list_files_with_extension(load_dir, &self.module_extension)
            .inspect_err(|e| error!("{}", e))?;
        debug!(
            load_dir = %load_dir.display(),
            load_modules = load_modules.len(),
            modules = modules.len(),
            "scanned load directory"
        );

        Ok(self.builder.build(&load_modules, &modules, change_set))
    }

    /// Build the manifest and write it to `destination`
    pub fn write(
        &self,
        load_dir: &Path,
        change_set: &ChangeSet,
        destination: &Path,
        events: &dyn PackageEventSink,
    ) -> PackResult<PathBuf> {
        let manifest = self.build(load_dir, change_set)?;

        self.fs
            .write(destination, &manifest.render())
            .inspect_err(|e| error!("{}", e))?;

        info!(
            manifest = %destination.display(),
            entries = manifest.len(),
            load = manifest.count(Category::Load),
            modules = manifest.count(Category::Mod),
            jcl = manifest.count(Category::Jcl),
            control_cards = manifest.count(Category::ControlCard),
            procs = manifest.count(Category::Proc),
            "manifest written"
        );
        events.on_event(PackageEvent::ManifestWritten {
            path: destination.to_path_buf(),
        });

        Ok(destination.to_path_buf())
    }
}
