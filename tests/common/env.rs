//! Test environment for running the `stitch` binary in isolation.
//!
//! Every run gets its own project directory and home directory, and the
//! `STITCH_*` variables of the calling shell are cleared, so neither a
//! developer's config nor their environment leaks into assertions.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const STITCH_VARS: &[&str] = &[
    "STITCH_NAMESPACE",
    "STITCH_MAX_PRICE",
    "STITCH_ADMIN_ACL",
    "STITCH_PRETTY",
    "RUST_LOG",
];

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as one exported document
    pub fn stitch(&self) -> stitch::Stitch {
        stitch::Stitch::from_json(self.stdout.trim())
            .unwrap_or_else(|e| panic!("stdout is not exchange JSON ({}):\n{}", e, self.stdout))
    }

    /// Parse stdout as NDJSON events
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad event {}: {}", l, e)))
            .collect()
    }
}

/// Isolated project + home directories
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file under the project directory, creating parents
    pub fn write_project_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Write the user-level config (`$XDG_CONFIG_HOME/stitch/config.toml`)
    pub fn write_user_config(&self, content: &str) {
        let path = self.xdg_config_home().join("stitch/config.toml");
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write user config");
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_stitch"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.xdg_config_home());
        for var in STITCH_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        let output = cmd.output().expect("Failed to execute stitch");
        to_result(output)
    }

    fn xdg_config_home(&self) -> PathBuf {
        self.home_dir.path().join(".config")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Path as a CLI argument
pub fn arg(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}
