//! Category value object - classifies packaged artifacts

use std::fmt;

/// Artifact category
///
/// The category decides the manifest tag, the package subdirectory the
/// artifact is copied into, and how its source path is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Platform load module (`.so` / `.dll`)
    Load,
    /// Generic module (`.mod`)
    Mod,
    /// Job control language
    Jcl,
    /// Catalogued procedure
    Proc,
    /// Control card
    ControlCard,
    /// CICS resource definition; copied straight from the repository and never
    /// listed in a manifest
    Cics,
}

impl Category {
    /// Categories that can appear in a manifest, in manifest order
    pub const MANIFEST_ORDER: [Category; 5] = [
        Category::Load,
        Category::Mod,
        Category::Jcl,
        Category::ControlCard,
        Category::Proc,
    ];

    /// Package subdirectories, in creation order
    pub const PACKAGE_DIRECTORIES: [Category; 5] = [
        Category::Load,
        Category::Cics,
        Category::Jcl,
        Category::Proc,
        Category::ControlCard,
    ];

    /// Literal tag written as the first manifest field
    pub fn tag(&self) -> &'static str {
        match self {
            Category::Load => "Load",
            Category::Mod => "MOD",
            Category::Jcl => "JCL",
            Category::Proc => "PROC",
            Category::ControlCard => "CTLCRD",
            Category::Cics => "CICS",
        }
    }

    /// Parse a manifest tag
    pub fn from_tag(tag: &str) -> Option<Category> {
        Self::MANIFEST_ORDER
            .into_iter()
            .find(|category| category.tag() == tag)
    }

    /// Subdirectory of the versioned package root
    pub fn directory_name(&self) -> &'static str {
        match self {
            Category::Load | Category::Mod => "load",
            Category::Cics => "cics",
            Category::Jcl => "jcl",
            Category::Proc => "proclib",
            Category::ControlCard => "ctlcards",
        }
    }

    /// Source artifacts whose manifest path is relative to the repository root
    pub fn resolves_from_repository(&self) -> bool {
        matches!(
            self,
            Category::Jcl | Category::Proc | Category::ControlCard | Category::Cics
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
