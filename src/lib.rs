//! deploypack - deployment package builder
//!
//! Resolves a git change set, classifies built and source artifacts into a
//! manifest, assembles a category-organised package tree and archives it.
//! A system mode archives a whole directory without manifest logic.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{PackageOutcome, PackageRequest, PackageUseCase};
pub use config::Config;
pub use domain::entities::{ChangeSet, Manifest, ManifestEntry};
pub use domain::value_objects::{ArchiveFormat, Category, ChangeStatus, MatchPolicy, PackageType};
pub use error::{PackError, PackResult};
