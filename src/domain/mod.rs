//! Domain Layer
//!
//! Pure packaging logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - ChangeSet, Manifest
//! - `value_objects/` - Category, ChangeStatus, MatchPolicy, ArchiveFormat, PackageType
//! - `services/` - ChangeMatcher, ManifestBuilder, naming
//! - `ports/` - VersionControl, FileSystem, Archiver, PackageEventSink

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
