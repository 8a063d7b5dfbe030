//! Path normalization.
//!
//! Normalization tokenizes a path on the separator and replays the segments
//! onto a stack:
//! - empty and `.` segments are dropped
//! - `..` pops the most recent real segment
//! - anything else is pushed
//!
//! An absolute path keeps an implicit root at the bottom of the stack that
//! `..` can never pop. Popping past it, or popping an empty relative stack,
//! makes the whole path malformed.

use crate::error::{Error, Result};
use crate::path::absolute::{is_absolute, make_absolute};
use crate::path::SEPARATOR;
use crate::split::segments;

const CURRENT_DIR: &str = ".";
const PARENT_DIR: &str = "..";

/// Segments of a path under normalization, anchored at the root when the
/// path is absolute.
#[derive(Debug)]
struct SegmentStack<'a> {
    absolute: bool,
    segments: Vec<&'a str>,
}

impl<'a> SegmentStack<'a> {
    fn new(absolute: bool) -> Self {
        Self {
            absolute,
            segments: Vec::new(),
        }
    }

    fn push(&mut self, segment: &'a str) {
        self.segments.push(segment);
    }

    /// Pop the last real segment. Returns `false` when only the root (or
    /// nothing, for a relative path) is left.
    fn pop(&mut self) -> bool {
        self.segments.pop().is_some()
    }

    fn into_path(self) -> String {
        let joined = self.segments.join(&SEPARATOR.to_string());
        if self.absolute {
            format!("{SEPARATOR}{joined}")
        } else {
            joined
        }
    }
}

/// Normalize a path, removing redundant separators and `.`/`..` segments.
///
/// The empty string is returned unchanged. A relative path whose segments
/// cancel out entirely (such as `a/..` or `./`) normalizes to the empty
/// string as well, since no real segment is left to join.
///
/// # Errors
///
/// Returns [`Error::MalformedPath`] if a `..` segment would climb above the
/// root of an absolute path or above the start of a relative one.
///
/// # Examples
///
/// ```
/// use pathkit::path::normalize::trim_path;
///
/// assert_eq!(trim_path("/a/./b/../c").unwrap(), "/a/c");
/// assert_eq!(trim_path("a//b/").unwrap(), "a/b");
/// assert_eq!(trim_path("").unwrap(), "");
///
/// assert!(trim_path("/..").unwrap_err().is_malformed());
/// assert!(trim_path("a/../..").unwrap_err().is_malformed());
/// ```
pub fn trim_path(path: &str) -> Result<String> {
    if path.is_empty() {
        return Ok(String::new());
    }

    let mut stack = SegmentStack::new(path.starts_with(SEPARATOR));

    for segment in segments(path) {
        match segment {
            CURRENT_DIR => {}
            PARENT_DIR => {
                if !stack.pop() {
                    let reason = if stack.absolute {
                        "'..' climbs above the root directory"
                    } else {
                        "'..' climbs above the start of a relative path"
                    };
                    return Err(Error::MalformedPath {
                        path: path.to_string(),
                        reason: reason.to_string(),
                    });
                }
            }
            _ => stack.push(segment),
        }
    }

    Ok(stack.into_path())
}

/// Complete `path` against `cwd` and normalize the result.
///
/// `cwd` must itself be absolute, so the result always is too.
///
/// # Errors
///
/// Returns [`Error::RelativeWorkingDir`] if `cwd` is not absolute, and
/// [`Error::MalformedPath`] if normalization fails.
///
/// # Examples
///
/// ```
/// use pathkit::path::normalize::resolve;
///
/// assert_eq!(resolve("proj/../proj2/./x", "/home/u").unwrap(), "/home/u/proj2/x");
/// assert_eq!(resolve("/etc//hosts", "/home/u").unwrap(), "/etc/hosts");
/// ```
pub fn resolve(path: &str, cwd: &str) -> Result<String> {
    if !is_absolute(cwd) {
        return Err(Error::RelativeWorkingDir {
            cwd: cwd.to_string(),
        });
    }
    trim_path(&make_absolute(path, cwd))
}
