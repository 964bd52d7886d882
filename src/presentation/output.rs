//! Console Output
//!
//! The user-facing confirmation lines. Everything else goes to the log file.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::ports::{PackageEvent, PackageEventSink, PackageKind};

pub const STARTUP_LINE: &str = "Starting creation of package archive";

/// Render the console line for an event, if it has one
pub fn console_line(event: &PackageEvent) -> Option<String> {
    match event {
        PackageEvent::ManifestWritten { path } => {
            Some(format!("Manifest file {} created", path.display()))
        }
        PackageEvent::DirectoryTreeCreated {
            kind: PackageKind::Application,
            ..
        } => Some("Temporary structure created for build artifacts".to_string()),
        PackageEvent::Archived {
            kind: PackageKind::Application,
            path,
        } => Some(format!(
            "Deployment package {} created successfully.",
            path.display()
        )),
        PackageEvent::Archived {
            kind: PackageKind::System,
            path,
        } => Some(format!(
            "System Deployment package {} created successfully.",
            path.display()
        )),
        _ => None,
    }
}

/// Prints confirmation lines to a writer (stdout in production)
pub struct ConsoleEventSink<W: Write> {
    out: Mutex<W>,
    log_file: PathBuf,
}

impl ConsoleEventSink<std::io::Stdout> {
    pub fn stdout(log_file: impl Into<PathBuf>) -> Self {
        Self::new(std::io::stdout(), log_file)
    }
}

impl<W: Write> ConsoleEventSink<W> {
    pub fn new(out: W, log_file: impl Into<PathBuf>) -> Self {
        Self {
            out: Mutex::new(out),
            log_file: log_file.into(),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write> PackageEventSink for ConsoleEventSink<W> {
    fn on_event(&self, event: PackageEvent) {
        let Some(line) = console_line(&event) else {
            return;
        };
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        let _ = writeln!(out, "{}", line);
        if matches!(event, PackageEvent::Archived { .. }) {
            let _ = writeln!(out, "Review {} for details", self.log_file.display());
        }
    }
}
