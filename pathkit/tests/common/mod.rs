//! Common test utilities for integration tests.
//!
//! This module provides helpers for building throwaway directory trees and
//! converting their paths to the string form the pathkit API takes.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A scratch directory that is removed when dropped.
pub struct Sandbox {
    dir: TempDir,
}

#[allow(dead_code)]
impl Sandbox {
    /// Creates a new, empty sandbox.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    /// The sandbox root as a path.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// The sandbox root as a UTF-8 string.
    pub fn root_str(&self) -> String {
        utf8(self.dir.path())
    }

    /// `relative` joined onto the sandbox root, as a string.
    pub fn join(&self, relative: &str) -> String {
        format!("{}/{relative}", self.root_str())
    }

    /// `relative` joined onto the sandbox root, as a path.
    pub fn path(&self, relative: &str) -> PathBuf {
        PathBuf::from(self.join(relative))
    }

    /// Writes a regular file at `relative`, creating no directories.
    pub fn write_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.path(relative);
        fs::write(&path, contents).expect("failed to write file");
        path
    }
}

/// Converts a path to a string, panicking on non-UTF-8 input.
#[allow(dead_code)]
pub fn utf8(path: &Path) -> String {
    path.to_str().expect("temp paths are UTF-8").to_string()
}
