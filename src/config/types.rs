//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::services::SourceMarkers;
use crate::domain::value_objects::{ArchiveFormat, MatchPolicy};

/// Commit resolution settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionControlConfig {
    /// `appVersion` value that selects initial-load resolution
    pub initial_label: String,
    /// Literal searched for in commit messages for an initial load
    pub initial_marker: String,
}

impl Default for VersionControlConfig {
    fn default() -> Self {
        Self {
            initial_label: "Init".to_string(),
            initial_marker: "Init".to_string(),
        }
    }
}

/// Manifest derivation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    pub match_policy: MatchPolicy,
    /// Load module extension; defaults to `dll` on Windows and `so` elsewhere
    pub load_extension: Option<String>,
    pub module_extension: String,
    pub jcl_marker: String,
    pub control_card_marker: String,
    pub proc_marker: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        let markers = SourceMarkers::default();
        Self {
            match_policy: MatchPolicy::default(),
            load_extension: None,
            module_extension: "mod".to_string(),
            jcl_marker: markers.jcl,
            control_card_marker: markers.control_card,
            proc_marker: markers.proc,
        }
    }
}

impl ManifestConfig {
    pub fn load_extension(&self) -> &str {
        match &self.load_extension {
            Some(ext) => ext.as_str(),
            None if cfg!(windows) => "dll",
            None => "so",
        }
    }

    pub fn markers(&self) -> SourceMarkers {
        SourceMarkers {
            jcl: self.jcl_marker.clone(),
            control_card: self.control_card_marker.clone(),
            proc: self.proc_marker.clone(),
        }
    }
}

/// Package layout and archive settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    /// Base directory for application packages, relative to the working directory
    pub app_root: PathBuf,
    /// Base directory for system packages, relative to the working directory
    pub system_root: PathBuf,
    /// Repository subdirectory holding CICS resource definitions
    pub cics_dir: PathBuf,
    pub cics_extension: String,
    /// Defaults to zip on Windows and tar elsewhere
    pub archive_format: Option<ArchiveFormat>,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            app_root: PathBuf::from("buildartefacts"),
            system_root: PathBuf::from("systemartefacts"),
            cics_dir: PathBuf::from("CICS"),
            cics_extension: "rdt".to_string(),
            archive_format: None,
        }
    }
}

impl PackageConfig {
    pub fn archive_format(&self) -> ArchiveFormat {
        self.archive_format
            .unwrap_or_else(ArchiveFormat::platform_default)
    }
}

/// Log file settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file, relative to the working directory; opened in append mode
    pub file: PathBuf,
    /// Default filter when `DEPLOYPACK_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("createPackage.log"),
            level: "info".to_string(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub version_control: VersionControlConfig,

    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub package: PackageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}
