//! Manifest builder - maps scanned artifacts and a change set to a manifest

use std::path::{Path, PathBuf};

use crate::domain::entities::{ChangeSet, Manifest, ManifestEntry};
use crate::domain::value_objects::Category;

use super::change_matcher::ChangeMatcher;

/// Substrings that place a changed path into a source category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceMarkers {
    pub jcl: String,
    pub control_card: String,
    pub proc: String,
}

impl Default for SourceMarkers {
    fn default() -> Self {
        Self {
            jcl: ".jcl".to_string(),
            control_card: ".ctl".to_string(),
            proc: ".prc".to_string(),
        }
    }
}

impl SourceMarkers {
    /// Passes in manifest order: JCL, control cards, procedures
    pub fn passes(&self) -> [(Category, &str); 3] {
        [
            (Category::Jcl, self.jcl.as_str()),
            (Category::ControlCard, self.control_card.as_str()),
            (Category::Proc, self.proc.as_str()),
        ]
    }
}

/// Builds a [`Manifest`] without touching the file system
#[derive(Debug, Clone, Default)]
pub struct ManifestBuilder {
    matcher: ChangeMatcher,
    markers: SourceMarkers,
}

impl ManifestBuilder {
    pub fn new(matcher: ChangeMatcher, markers: SourceMarkers) -> Self {
        Self { matcher, markers }
    }

    /// Entry order: load modules, generic modules (each in scan order), then
    /// one pass per source category over the change set.
    pub fn build(
        &self,
        load_modules: &[PathBuf],
        modules: &[PathBuf],
        change_set: &ChangeSet,
    ) -> Manifest {
        let mut manifest = Manifest::new();

        for path in load_modules {
            manifest.push(self.load_entry(Category::Load, path, change_set));
        }
        for path in modules {
            manifest.push(self.load_entry(Category::Mod, path, change_set));
        }

        for (category, marker) in self.markers.passes() {
            for path in change_set.iter() {
                if self.matcher.has_marker(path, marker) {
                    manifest.push(ManifestEntry::changed_source(category, path));
                }
            }
        }

        manifest
    }

    fn load_entry(&self, category: Category, path: &Path, change_set: &ChangeSet) -> ManifestEntry {
        let display_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let status = self.matcher.status_for(path, change_set);
        ManifestEntry::new(category, display_name, status, path)
    }
}
