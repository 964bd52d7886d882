//! ArchiveFormat value object

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Format of the final deployment archive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ArchiveFormat {
    Zip,
    Tar,
    TarGz,
}

impl ArchiveFormat {
    /// zip on Windows, tar everywhere else
    pub fn platform_default() -> Self {
        if cfg!(windows) {
            ArchiveFormat::Zip
        } else {
            ArchiveFormat::Tar
        }
    }

    /// File extension without the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            ArchiveFormat::Zip => "zip",
            ArchiveFormat::Tar => "tar",
            ArchiveFormat::TarGz => "tar.gz",
        }
    }
}

impl std::fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArchiveFormat::Zip => write!(f, "zip"),
            ArchiveFormat::Tar => write!(f, "tar"),
            ArchiveFormat::TarGz => write!(f, "tar-gz"),
        }
    }
}

impl FromStr for ArchiveFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zip" => Ok(ArchiveFormat::Zip),
            "tar" => Ok(ArchiveFormat::Tar),
            "tar-gz" | "tar.gz" | "tgz" => Ok(ArchiveFormat::TarGz),
            other => Err(format!("unknown archive format '{}'", other)),
        }
    }
}
