//! PackageType value object - selects the packaging pipeline

/// Packaging pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageType {
    /// Manifest-driven application package
    App,
    /// Wholesale directory package
    Sys,
}

impl PackageType {
    /// Parse the command-line literal. Matching is exact; anything else is
    /// `None` and the caller does nothing.
    pub fn parse(s: &str) -> Option<PackageType> {
        match s {
            "APP" => Some(PackageType::App),
            "SYS" => Some(PackageType::Sys),
            _ => None,
        }
    }
}
