//! MatchPolicy value object - how change-set paths are compared

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Matching policy for change detection and category markers
///
/// `Substring` is the historical behaviour: an artifact counts as changed when
/// its stem occurs anywhere in a changed path, and a path belongs to a
/// category when the marker occurs anywhere in it. This yields false
/// positives (`FOO` matches `src/FOOBAR.cbl`, `.jcl` matches
/// `docs/x.jcl.md`). `Exact` compares file stems and extensions instead.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum MatchPolicy {
    #[default]
    Substring,
    Exact,
}

impl MatchPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchPolicy::Substring => "substring",
            MatchPolicy::Exact => "exact",
        }
    }
}

impl FromStr for MatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "substring" => Ok(MatchPolicy::Substring),
            "exact" => Ok(MatchPolicy::Exact),
            other => Err(format!("unknown match policy '{}'", other)),
        }
    }
}

impl std::fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
