//! ChangeSet entity - paths touched by one resolved commit

/// Paths touched by a single commit, in the order version control reported them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    commit: String,
    paths: Vec<String>,
}

impl ChangeSet {
    pub fn new(commit: impl Into<String>, paths: Vec<String>) -> Self {
        Self {
            commit: commit.into(),
            paths,
        }
    }

    /// Abbreviated id of the commit the paths came from
    pub fn commit(&self) -> &str {
        &self.commit
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }
}
