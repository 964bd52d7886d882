//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `vcs/` - Git command-line adapter
//! - `archive/` - Zip and tar writers

pub mod archive;
pub mod fs;
pub mod vcs;

// Re-export for convenience
pub use archive::{archiver_for, TarArchiver, ZipArchiver};
pub use fs::LocalFs;
pub use vcs::GitCli;
