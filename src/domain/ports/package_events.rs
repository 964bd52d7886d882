//! Package Event Port
//!
//! Observable milestones of a packaging run. The console sink turns a few of
//! them into the user-facing confirmation lines; tests record them.

use std::path::PathBuf;

/// Which pipeline produced an archive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageKind {
    Application,
    System,
}

/// Event emitted during a packaging run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageEvent {
    BranchCheckedOut { branch: String },
    CommitResolved { commit: String },
    ChangeSetCollected { paths: usize },
    ManifestWritten { path: PathBuf },
    DirectoryTreeCreated { kind: PackageKind, root: PathBuf },
    FileCopied { from: PathBuf, to: PathBuf },
    ManifestCopied { to: PathBuf },
    CicsFilesCopied { count: usize },
    Archived { kind: PackageKind, path: PathBuf },
    Skipped { package_type: String },
}

/// Trait for receiving package events
pub trait PackageEventSink {
    fn on_event(&self, event: PackageEvent);
}
