//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DEPLOYPACK_*)
//! 3. Config file (`--config`, or `deploypack.toml` in the working directory)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_or_default, load_with_warnings, with_env_overrides, with_overrides_from, ConfigWarning,
    CONFIG_FILE_NAME, ENV_ARCHIVE_FORMAT, ENV_LOG_FILE, ENV_MATCH_POLICY,
};
pub use types::{Config, LoggingConfig, ManifestConfig, PackageConfig, VersionControlConfig};
