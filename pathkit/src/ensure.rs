//! Making sure directories exist.
//!
//! [`ensure_dir_recursive`] works like `mkdir -p`, creating missing
//! ancestors from the outermost inwards. Both entry points are idempotent:
//! a directory that already exists counts as success.
//!
//! Checking for a directory and then creating it is not atomic. If creation
//! fails, the path is checked again, and a directory that appeared in the
//! meantime (created by another process) also counts as success.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::decompose::parent;

/// Permission mode used for new directories when none is configured.
pub const DEFAULT_DIR_MODE: u32 = 0o755;

/// Outcome of ensuring a single directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    /// The directory was already there.
    Existed,
    /// The directory was created by this call.
    Created,
}

impl DirStatus {
    /// Whether this call created the directory.
    #[must_use]
    pub fn was_created(self) -> bool {
        matches!(self, Self::Created)
    }
}

/// Ensure `path` exists as a directory, creating that single level if
/// needed.
///
/// The parent must already exist. `mode` is applied to a newly created
/// directory (subject to the process umask) and ignored on non-Unix
/// platforms.
///
/// # Errors
///
/// Returns [`Error::NotADirectory`] if `path` exists but is not a
/// directory, or [`Error::CreateDirectory`] if it could not be created.
///
/// # Examples
///
/// ```no_run
/// use pathkit::ensure::{ensure_dir, DirStatus, DEFAULT_DIR_MODE};
///
/// let status = ensure_dir("/tmp/cache", DEFAULT_DIR_MODE).unwrap();
/// assert!(matches!(status, DirStatus::Created | DirStatus::Existed));
/// ```
pub fn ensure_dir(path: &str, mode: u32) -> Result<DirStatus> {
    let dir = Path::new(path);
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(DirStatus::Existed),
        Ok(_) => Err(Error::NotADirectory {
            path: dir.to_path_buf(),
        }),
        Err(_) => create_dir(dir, mode),
    }
}

/// Ensure `path` and all of its ancestors exist as directories.
///
/// Missing ancestors are created outermost first. Returns the directories
/// that this call created, in creation order; an empty list means
/// everything already existed.
///
/// # Errors
///
/// Returns [`Error::NotADirectory`] if `path` or any ancestor exists but is
/// not a directory, or [`Error::CreateDirectory`] if a level could not be
/// created. Levels created before the failure are left in place.
///
/// # Examples
///
/// ```no_run
/// use pathkit::ensure::{ensure_dir_recursive, DEFAULT_DIR_MODE};
///
/// let created = ensure_dir_recursive("/tmp/a/b/c", DEFAULT_DIR_MODE).unwrap();
/// // a second call finds everything in place
/// assert!(ensure_dir_recursive("/tmp/a/b/c", DEFAULT_DIR_MODE).unwrap().is_empty());
/// ```
pub fn ensure_dir_recursive(path: &str, mode: u32) -> Result<Vec<PathBuf>> {
    let mut created = Vec::new();
    ensure_dir_into(path, mode, &mut created)?;
    Ok(created)
}

fn ensure_dir_into(path: &str, mode: u32, created: &mut Vec<PathBuf>) -> Result<()> {
    let parent = parent(path);
    if !parent.is_empty() {
        match fs::metadata(parent) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(Error::NotADirectory {
                    path: PathBuf::from(parent),
                })
            }
            Err(_) => {
                log::debug!("ancestor {parent} missing, descending");
                ensure_dir_into(parent, mode, created)?;
            }
        }
    }

    if ensure_dir(path, mode)?.was_created() {
        created.push(PathBuf::from(path));
    }
    Ok(())
}

fn create_dir(dir: &Path, mode: u32) -> Result<DirStatus> {
    match builder(mode).create(dir) {
        Ok(()) => {
            log::debug!("created directory {} (mode {mode:o})", dir.display());
            Ok(DirStatus::Created)
        }
        Err(source) => {
            // Lost a race with another creator?
            if dir.is_dir() {
                log::debug!(
                    "directory {} appeared concurrently ({source})",
                    dir.display()
                );
                return Ok(DirStatus::Existed);
            }
            Err(create_error(dir, source))
        }
    }
}

#[cfg(unix)]
fn builder(mode: u32) -> fs::DirBuilder {
    use std::os::unix::fs::DirBuilderExt;

    let mut builder = fs::DirBuilder::new();
    builder.mode(mode);
    builder
}

#[cfg(not(unix))]
fn builder(_mode: u32) -> fs::DirBuilder {
    fs::DirBuilder::new()
}

fn create_error(dir: &Path, source: io::Error) -> Error {
    if dir.exists() {
        Error::NotADirectory {
            path: dir.to_path_buf(),
        }
    } else {
        Error::CreateDirectory {
            path: dir.to_path_buf(),
            source,
        }
    }
}
