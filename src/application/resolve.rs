//! Change-set resolution
//!
//! Checks out the requested branch, selects one commit (initial load or the
//! branch tip) and collects the paths it touched.

use tracing::{error, info};

use crate::config::VersionControlConfig;
use crate::domain::entities::ChangeSet;
use crate::domain::ports::{LogQuery, PackageEvent, PackageEventSink, VersionControl};
use crate::error::{PackError, PackResult};

pub struct ChangeSetResolver<'a, V: VersionControl> {
    vcs: &'a V,
    initial_label: String,
    initial_marker: String,
}

impl<'a, V: VersionControl> ChangeSetResolver<'a, V> {
    pub fn new(vcs: &'a V, config: &VersionControlConfig) -> Self {
        Self {
            vcs,
            initial_label: config.initial_label.clone(),
            initial_marker: config.initial_marker.clone(),
        }
    }

    /// The log query a version selects: the initial-load label searches for
    /// the marker commit, anything else takes the branch tip.
    pub fn query_for(&self, version: &str) -> LogQuery {
        if version == self.initial_label {
            LogQuery::MessageContains(self.initial_marker.clone())
        } else {
            LogQuery::Latest
        }
    }

    pub fn resolve(
        &self,
        branch: &str,
        version: &str,
        events: &dyn PackageEventSink,
    ) -> PackResult<ChangeSet> {
        self.vcs.checkout(branch).inspect_err(|e| error!("{}", e))?;
        info!(branch, "checked out branch");
        events.on_event(PackageEvent::BranchCheckedOut {
            branch: branch.to_string(),
        });

        let query = self.query_for(version);
        let commits = self.vcs.log(&query).inspect_err(|e| error!("{}", e))?;
        let commit = match commits.into_iter().next() {
            Some(commit) => commit,
            None => {
                let err = PackError::NoMatchingCommit {
                    query: query.to_string(),
                };
                error!("{}", err);
                return Err(err);
            }
        };
        info!(commit = %commit.id, subject = %commit.subject, "resolved commit");
        events.on_event(PackageEvent::CommitResolved {
            commit: commit.id.clone(),
        });

        let paths = self
            .vcs
            .changed_paths(&commit.id)
            .inspect_err(|e| error!("{}", e))?;
        info!(commit = %commit.id, paths = paths.len(), "collected change set");
        events.on_event(PackageEvent::ChangeSetCollected { paths: paths.len() });

        Ok(ChangeSet::new(commit.id, paths))
    }
}
