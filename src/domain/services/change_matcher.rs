//! Change matcher - decides which change-set paths concern an artifact
//!
//! Under the default `Substring` policy, both checks are plain substring
//! containment. That is a known weakness: a stem that is a substring of an
//! unrelated path, or a marker appearing mid-path, both count as matches.
//! `Exact` compares the file stem and the extension instead.

use std::ffi::OsStr;
use std::path::Path;

use crate::domain::entities::ChangeSet;
use crate::domain::value_objects::{ChangeStatus, MatchPolicy};

/// Policy-driven matcher for change detection and category markers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeMatcher {
    policy: MatchPolicy,
}

impl ChangeMatcher {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    /// Change-set paths that reference the artifact's stem
    pub fn matching_paths<'a>(&self, artifact: &Path, change_set: &'a ChangeSet) -> Vec<&'a str> {
        let Some(stem) = artifact.file_stem().filter(|stem| !stem.is_empty()) else {
            return Vec::new();
        };

        match self.policy {
            MatchPolicy::Substring => {
                let stem = stem.to_string_lossy();
                change_set
                    .iter()
                    .filter(|path| path.contains(stem.as_ref()))
                    .collect()
            }
            MatchPolicy::Exact => change_set
                .iter()
                .filter(|path| Path::new(path).file_stem() == Some(stem))
                .collect(),
        }
    }

    /// `Changed` iff at least one change-set path references the artifact
    pub fn status_for(&self, artifact: &Path, change_set: &ChangeSet) -> ChangeStatus {
        if self.matching_paths(artifact, change_set).is_empty() {
            ChangeStatus::Unchanged
        } else {
            ChangeStatus::Changed
        }
    }

    /// Whether a changed path carries a category marker such as `.jcl`
    pub fn has_marker(&self, path: &str, marker: &str) -> bool {
        if marker.is_empty() {
            return false;
        }
        match self.policy {
            MatchPolicy::Substring => path.contains(marker),
            MatchPolicy::Exact => {
                let extension = marker.trim_start_matches('.');
                Path::new(path).extension() == Some(OsStr::new(extension))
            }
        }
    }
}
