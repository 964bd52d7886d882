//! Git CLI adapter
//!
//! Implements the VersionControl port by running the `git` binary against a
//! repository directory.

use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::ports::{CommitSummary, LogQuery, VersionControl};
use crate::error::{PackError, PackResult};

/// Version control through the `git` command line
pub struct GitCli {
    repo: PathBuf,
    program: PathBuf,
}

impl GitCli {
    pub fn new(repo: impl Into<PathBuf>) -> Self {
        Self {
            repo: repo.into(),
            program: PathBuf::from("git"),
        }
    }

    /// Use a specific git executable
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Check if git is installed and available
    pub fn check_available() -> bool {
        Command::new("git")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn run(&self, operation: &str, args: &[&str]) -> PackResult<String> {
        debug!(repo = %self.repo.display(), ?args, "running git {}", operation);

        let output = Command::new(&self.program)
            .arg("-C")
            .arg(&self.repo)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| PackError::VersionControl {
                operation: operation.to_string(),
                message: if e.kind() == io::ErrorKind::NotFound {
                    format!("{} executable not found", self.program.display())
                } else {
                    e.to_string()
                },
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(PackError::VersionControl {
                operation: operation.to_string(),
                message: if stderr.is_empty() {
                    format!("exit code {:?}", output.status.code())
                } else {
                    stderr
                },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl VersionControl for GitCli {
    fn checkout(&self, branch: &str) -> PackResult<()> {
        self.run("checkout", &["checkout", "-q", branch])?;
        Ok(())
    }

    fn log(&self, query: &LogQuery) -> PackResult<Vec<CommitSummary>> {
        let grep;
        let mut args = vec!["log", "--oneline", "--no-decorate", "--no-color"];
        match query {
            LogQuery::Latest => args.extend(["-n", "1"]),
            LogQuery::MessageContains(marker) => {
                grep = format!("--grep={}", marker);
                args.extend(["--fixed-strings", grep.as_str()]);
            }
        }

        let stdout = self.run("log", &args)?;
        Ok(stdout.lines().filter_map(CommitSummary::parse_oneline).collect())
    }

    fn changed_paths(&self, commit: &str) -> PackResult<Vec<String>> {
        let stdout = self.run(
            "show",
            &[
                "-c",
                "core.quotePath=false",
                "show",
                "--name-only",
                "--no-color",
                "--pretty=format:",
                commit,
            ],
        )?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}
