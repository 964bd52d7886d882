//! VersionControl port - the minimal git surface the resolver needs

use crate::error::PackResult;

/// Commit filter for `log`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogQuery {
    /// The tip of the checked-out branch
    Latest,
    /// Commits whose message contains the literal, newest first
    MessageContains(String),
}

impl std::fmt::Display for LogQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogQuery::Latest => write!(f, "the branch tip"),
            LogQuery::MessageContains(marker) => write!(f, "message containing '{}'", marker),
        }
    }
}

/// One line of `git log --oneline`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    pub id: String,
    pub subject: String,
}

impl CommitSummary {
    pub fn new(id: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            subject: subject.into(),
        }
    }

    /// Parse `"<id> <subject>"`
    pub fn parse_oneline(line: &str) -> Option<CommitSummary> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (id, subject) = line.split_once(' ').unwrap_or((line, ""));
        Some(CommitSummary::new(id, subject))
    }
}

/// Abstract version control interface
///
/// Implementations:
/// - `GitCli` - shells out to the `git` binary
/// - test doubles in the application tests
pub trait VersionControl {
    /// Check out a branch (the checkout is left in place afterwards)
    fn checkout(&self, branch: &str) -> PackResult<()>;

    /// Commit summaries matching the query, newest first
    fn log(&self, query: &LogQuery) -> PackResult<Vec<CommitSummary>>;

    /// Paths added, modified or deleted by a single commit
    fn changed_paths(&self, commit: &str) -> PackResult<Vec<String>>;
}
