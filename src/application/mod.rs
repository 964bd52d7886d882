//! Application Layer
//!
//! Use cases that orchestrate the packaging flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PackageUseCase` - Dispatches a run to the APP or SYS pipeline
//! - `ChangeSetResolver` - Branch checkout and commit selection
//! - `ManifestWriter` - Load-directory scan and manifest file
//! - `PackageAssembler` - Category tree, file copies and archive
//! - `SystemPackager` - Wholesale copy and archive

pub mod assemble;
pub mod manifest;
pub mod package;
pub mod resolve;
pub mod system;

pub use assemble::{PackageAssembler, PackageLayout};
pub use manifest::ManifestWriter;
pub use package::{PackageOutcome, PackageRequest, PackageUseCase};
pub use resolve::ChangeSetResolver;
pub use system::SystemPackager;
