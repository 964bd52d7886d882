//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod change_matcher;
mod manifest_builder;
pub mod naming;

pub use change_matcher::ChangeMatcher;
pub use manifest_builder::{ManifestBuilder, SourceMarkers};
