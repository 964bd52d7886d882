//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ArchiveFormat, MatchPolicy};
use crate::error::{PackError, PackResult};

use super::types::Config;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "deploypack.toml";

pub const ENV_MATCH_POLICY: &str = "DEPLOYPACK_MATCH_POLICY";
pub const ENV_ARCHIVE_FORMAT: &str = "DEPLOYPACK_ARCHIVE_FORMAT";
pub const ENV_LOG_FILE: &str = "DEPLOYPACK_LOG_FILE";

/// Non-fatal configuration warning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PackResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| PackError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PackError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the explicit config file, or `deploypack.toml` in the working
/// directory when present, or defaults. Environment overrides are applied
/// on top.
pub fn load_or_default(
    work_dir: &Path,
    explicit: Option<&Path>,
) -> PackResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => {
            let candidate = work_dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                load_with_warnings(&candidate)?
            } else {
                (Config::default(), Vec::new())
            }
        }
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (DEPLOYPACK_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup. Unparseable values are
/// ignored.
pub fn with_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(policy) = lookup(ENV_MATCH_POLICY).and_then(|v| v.parse::<MatchPolicy>().ok()) {
        config.manifest.match_policy = policy;
    }

    if let Some(format) = lookup(ENV_ARCHIVE_FORMAT).and_then(|v| v.parse::<ArchiveFormat>().ok())
    {
        config.package.archive_format = Some(format);
    }

    if let Some(file) = lookup(ENV_LOG_FILE).filter(|v| !v.trim().is_empty()) {
        config.logging.file = PathBuf::from(file);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "version_control",
        "initial_label",
        "initial_marker",
        "manifest",
        "match_policy",
        "load_extension",
        "module_extension",
        "jcl_marker",
        "control_card_marker",
        "proc_marker",
        "package",
        "app_root",
        "system_root",
        "cics_dir",
        "cics_extension",
        "archive_format",
        "logging",
        "file",
        "level",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, edit_distance(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= MAX_SUGGESTION_DISTANCE)
        .map(|(candidate, _)| candidate.to_string())
}

/// Largest edit distance still offered as a "did you mean" hint
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Character-level edit distance, one row at a time
fn edit_distance(a: &str, b: &str) -> usize {
    let target: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=target.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in target.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[target.len()]
}
