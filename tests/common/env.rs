//! Test environment builder for isolated deploypack runs.
//!
//! Layout under one temp directory:
//! - `work/` - current directory of the CLI (manifest, package tree, archive, log)
//! - `load/` - compiled load modules
//! - `repo/` - git repository

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Environment variables the CLI reads; cleared so the host cannot leak in
const DEPLOYPACK_ENV: &[&str] = &[
    "DEPLOYPACK_LOG",
    "DEPLOYPACK_LOG_FILE",
    "DEPLOYPACK_MATCH_POLICY",
    "DEPLOYPACK_ARCHIVE_FORMAT",
];

/// Check if git is installed and available
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

pub struct TestEnv {
    root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        for dir in ["work", "load", "repo"] {
            fs::create_dir_all(root.path().join(dir)).expect("Failed to create directory");
        }
        Self {
            root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_deploypack")),
        }
    }

    pub fn work_dir(&self) -> PathBuf {
        self.root.path().join("work")
    }

    pub fn load_dir(&self) -> PathBuf {
        self.root.path().join("load")
    }

    pub fn repo_dir(&self) -> PathBuf {
        self.root.path().join("repo")
    }

    pub fn work_path(&self, relative: &str) -> PathBuf {
        self.work_dir().join(relative)
    }

    /// Write a file below `dir`, creating parents
    pub fn write(&self, dir: &Path, relative: &str, content: &str) {
        let full_path = dir.join(relative);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn write_load(&self, name: &str, content: &str) {
        self.write(&self.load_dir(), name, content);
    }

    /// Run git inside the repository, panicking on failure
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .arg("-C")
            .arg(self.repo_dir())
            .args(args)
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Initialise the repository on a `main` branch
    pub fn init_repo(&self) {
        self.git(&["init", "-q"]);
        self.git(&["symbolic-ref", "HEAD", "refs/heads/main"]);
    }

    /// Write the files and commit everything with `message`
    pub fn commit(&self, message: &str, files: &[(&str, &str)]) {
        for (path, content) in files {
            self.write(&self.repo_dir(), path, content);
        }
        self.git(&["add", "-A"]);
        self.git(&[
            "-c",
            "user.name=Deploy Test",
            "-c",
            "user.email=deploy@example.com",
            "-c",
            "commit.gpgsign=false",
            "commit",
            "-q",
            "-m",
            message,
        ]);
    }

    /// Run the CLI with the five positional arguments plus extra flags
    pub fn run_package(
        &self,
        branch: &str,
        version: &str,
        package_type: &str,
        extra: &[&str],
    ) -> TestResult {
        let load = self.load_dir();
        let repo = self.repo_dir();
        let mut args = vec![
            load.to_str().expect("utf-8 temp path"),
            repo.to_str().expect("utf-8 temp path"),
            branch,
            version,
            package_type,
        ];
        args.extend_from_slice(extra);
        self.run(&args)
    }

    /// Run the CLI from the work directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.work_dir()).args(args);
        for key in DEPLOYPACK_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute deploypack");
        output_to_result(output)
    }

    /// Names in the work directory starting with `prefix`, sorted
    pub fn work_files_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.work_dir())
            .expect("Failed to list work dir")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with(prefix))
            .collect();
        names.sort();
        names
    }

    pub fn read_log(&self) -> String {
        fs::read_to_string(self.work_path("createPackage.log")).unwrap_or_default()
    }
}

/// Sorted listing of everything below `root`, directories with a trailing `/`
pub fn tree_listing(root: &Path) -> Vec<String> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<String>) {
        let mut entries: Vec<_> = fs::read_dir(dir)
            .expect("Failed to list directory")
            .filter_map(|e| e.ok())
            .collect();
        entries.sort_by_key(|e| e.file_name());
        for entry in entries {
            let path = entry.path();
            let relative = path
                .strip_prefix(root)
                .expect("entry below root")
                .to_string_lossy()
                .replace('\\', "/");
            if path.is_dir() {
                out.push(format!("{}/", relative));
                walk(root, &path, out);
            } else {
                out.push(relative);
            }
        }
    }

    let mut out = Vec::new();
    walk(root, root, &mut out);
    out
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
