//! ChangeStatus value object

use std::fmt;
use std::str::FromStr;

/// Whether an artifact was touched by the resolved commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeStatus {
    Changed,
    Unchanged,
}

impl ChangeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeStatus::Changed => "Changed",
            ChangeStatus::Unchanged => "Unchanged",
        }
    }

    pub fn is_changed(&self) -> bool {
        matches!(self, ChangeStatus::Changed)
    }
}

impl FromStr for ChangeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Changed" => Ok(ChangeStatus::Changed),
            "Unchanged" => Ok(ChangeStatus::Unchanged),
            other => Err(format!("unknown status '{}'", other)),
        }
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_statuses() {
        assert_eq!("Changed".parse(), Ok(ChangeStatus::Changed));
        assert_eq!("Unchanged".parse(), Ok(ChangeStatus::Unchanged));
    }

    #[test]
    fn parse_rejects_other_casing() {
        assert!("changed".parse::<ChangeStatus>().is_err());
    }
}
