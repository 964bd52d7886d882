//! CLI Argument Parsing
//!
//! Five positional arguments, order-sensitive, plus optional overrides for
//! the configuration file.

use std::path::PathBuf;

use clap::Parser;

use crate::application::PackageRequest;
use crate::config::Config;
use crate::domain::value_objects::{ArchiveFormat, MatchPolicy};

/// deploypack - build deployment archives from a git change set
#[derive(Parser, Debug)]
#[command(name = "deploypack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding compiled load modules (APP) or the tree to package (SYS)
    pub load_dir: PathBuf,

    /// Root of the git repository
    pub git_base_dir: PathBuf,

    /// Branch to check out
    pub branch: String,

    /// Application version; the initial-load label selects the marker commit
    pub app_version: String,

    /// APP or SYS; anything else does nothing
    pub package_type: String,

    /// Configuration file (default: deploypack.toml in the working directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// How artifacts are matched against changed paths
    #[arg(long, value_enum)]
    pub match_policy: Option<MatchPolicy>,

    /// Archive format (default: zip on Windows, tar elsewhere)
    #[arg(long, value_enum)]
    pub archive_format: Option<ArchiveFormat>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn request(&self) -> PackageRequest {
        PackageRequest {
            load_dir: self.load_dir.clone(),
            repo_dir: self.git_base_dir.clone(),
            branch: self.branch.clone(),
            version: self.app_version.clone(),
            package_type: self.package_type.clone(),
        }
    }

    /// Flags take precedence over file and environment settings
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(policy) = self.match_policy {
            config.manifest.match_policy = policy;
        }
        if let Some(format) = self.archive_format {
            config.package.archive_format = Some(format);
        }
        config
    }
}
