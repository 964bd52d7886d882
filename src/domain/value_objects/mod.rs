//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod archive_format;
mod category;
mod change_status;
mod match_policy;
mod package_type;

pub use archive_format::ArchiveFormat;
pub use category::Category;
pub use change_status::ChangeStatus;
pub use match_policy::MatchPolicy;
pub use package_type::PackageType;
