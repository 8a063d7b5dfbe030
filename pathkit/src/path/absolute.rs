//! Absolute path detection and completion.

use crate::error::Result;
use crate::locate;
use crate::path::SEPARATOR;

/// Whether `path` starts at the filesystem root.
///
/// # Examples
///
/// ```
/// use pathkit::path::absolute::is_absolute;
///
/// assert!(is_absolute("/x"));
/// assert!(!is_absolute("x"));
/// assert!(!is_absolute(""));
/// ```
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    path.starts_with(SEPARATOR)
}

/// Prefix a relative (or empty) path with `cwd`.
///
/// Absolute paths are returned unchanged. The result is not normalized;
/// pass it through [`trim_path`](crate::path::normalize::trim_path) to
/// collapse the joining separator and any dot segments.
///
/// # Examples
///
/// ```
/// use pathkit::path::absolute::make_absolute;
///
/// assert_eq!(make_absolute("src/main.rs", "/work"), "/work/src/main.rs");
/// assert_eq!(make_absolute("", "/work"), "/work/");
/// assert_eq!(make_absolute("/etc", "/work"), "/etc");
/// ```
#[must_use]
pub fn make_absolute(path: &str, cwd: &str) -> String {
    if is_absolute(path) {
        path.to_string()
    } else {
        format!("{cwd}{SEPARATOR}{path}")
    }
}

/// Complete `path` against the process's current working directory.
///
/// The working directory is queried on every call.
///
/// # Errors
///
/// Returns an error if `path` is relative and the current directory cannot
/// be determined or is not valid UTF-8.
///
/// # Examples
///
/// ```no_run
/// use pathkit::path::absolute::complete_full_path;
///
/// let full = complete_full_path("data").unwrap();
/// assert!(full.starts_with('/'));
/// ```
pub fn complete_full_path(path: &str) -> Result<String> {
    if is_absolute(path) {
        return Ok(path.to_string());
    }
    let cwd = locate::current_dir()?;
    Ok(make_absolute(path, &cwd))
}
