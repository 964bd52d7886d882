//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod archiver;
pub mod file_system;
pub mod package_events;
pub mod version_control;

pub use archiver::Archiver;
pub use file_system::FileSystem;
pub use package_events::{PackageEvent, PackageEventSink, PackageKind};
pub use version_control::{CommitSummary, LogQuery, VersionControl};
