//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builders that isolate the binary from the caller's environment

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the caller's settings into a test.
const ISOLATED_VARS: [&str; 3] = ["PATHKIT_CONFIG", "PATHKIT_DIR_MODE", "PATHKIT_LOG_MODE"];

/// Test environment with an isolated scratch directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder for the pathkit binary.
    ///
    /// Any `PATHKIT_*` variables from the surrounding environment are
    /// removed and the working directory is set to the sandbox.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathkit").expect("Failed to find pathkit binary");
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// The temp path as a string, for passing as a CLI argument.
    pub fn path_str(&self) -> String {
        self.temp_path
            .to_str()
            .expect("temp paths are UTF-8")
            .to_string()
    }

    /// The canonical temp path, as the OS reports it for the working
    /// directory.
    pub fn canonical_path_str(&self) -> String {
        self.temp_path
            .canonicalize()
            .expect("Failed to canonicalize temp dir")
            .to_str()
            .expect("temp paths are UTF-8")
            .to_string()
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file in the test environment.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Run a command and return its trimmed stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run pathkit");

        assert!(
            output.status.success(),
            "pathkit {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end_matches('\n')
            .to_string()
    }
}
