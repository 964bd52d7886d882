//! Version control implementations
//!
//! Concrete implementations of the VersionControl port.

mod git;

pub use git::GitCli;
