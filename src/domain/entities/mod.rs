//! Domain Entities
//!
//! - `ChangeSet` - Paths touched by the resolved commit
//! - `Manifest` - Categorised listing that drives package assembly

mod change_set;
mod manifest;

pub use change_set::ChangeSet;
pub use manifest::{Manifest, ManifestEntry, FIELD_SEPARATOR};
