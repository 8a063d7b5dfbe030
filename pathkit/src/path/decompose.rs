//! Literal path decomposition.
//!
//! These functions slice the input string as written. They never resolve
//! `.` or `..`; run [`trim_path`](crate::path::normalize::trim_path) first
//! when semantic components matter. Every function except
//! [`trim_leading_separators`] and [`subpath`] discards trailing separators
//! before looking at the path.
//!
//! For any path `p` that has a parent, joining `parent(p)` and
//! `file_name(p)` with a separator gives back `p` up to redundant
//! separators.

use crate::error::{Error, Result};
use crate::path::types::SplitPath;
use crate::path::SEPARATOR;

/// Strip trailing separators.
///
/// A path made only of separators collapses to a single `/`.
///
/// # Examples
///
/// ```
/// use pathkit::path::decompose::trim_trailing_separators;
///
/// assert_eq!(trim_trailing_separators("/a/b///"), "/a/b");
/// assert_eq!(trim_trailing_separators("///"), "/");
/// assert_eq!(trim_trailing_separators(""), "");
/// ```
#[must_use]
pub fn trim_trailing_separators(path: &str) -> &str {
    let trimmed = path.trim_end_matches(SEPARATOR);
    if trimmed.is_empty() && !path.is_empty() {
        &path[..SEPARATOR.len_utf8()]
    } else {
        trimmed
    }
}

/// Strip leading separators.
///
/// # Examples
///
/// ```
/// use pathkit::path::decompose::trim_leading_separators;
///
/// assert_eq!(trim_leading_separators("//a/b"), "a/b");
/// assert_eq!(trim_leading_separators("/"), "");
/// ```
#[must_use]
pub fn trim_leading_separators(path: &str) -> &str {
    path.trim_start_matches(SEPARATOR)
}

/// Split a path into its parent and last segment.
///
/// # Errors
///
/// Returns [`Error::MissingParent`] if the path is a bare name without any
/// separator, or is the root itself.
///
/// # Examples
///
/// ```
/// use pathkit::path::decompose::split;
///
/// let parts = split("/a/b/").unwrap();
/// assert_eq!(parts.parent(), "/a");
/// assert_eq!(parts.name(), "b");
///
/// assert_eq!(split("/top").unwrap().parent(), "/");
/// assert!(split("name").is_err());
/// ```
pub fn split(path: &str) -> Result<SplitPath<'_>> {
    let trimmed = trim_trailing_separators(path);
    match trimmed.rfind(SEPARATOR) {
        Some(pos) if pos + 1 < trimmed.len() => Ok(SplitPath::new(
            parent_at(trimmed, pos),
            &trimmed[pos + 1..],
        )),
        _ => Err(Error::MissingParent {
            path: path.to_string(),
        }),
    }
}

/// Return the parent of a path, or `""` if it has none.
///
/// The root has no parent.
///
/// # Examples
///
/// ```
/// use pathkit::path::decompose::parent;
///
/// assert_eq!(parent("/usr/local/"), "/usr");
/// assert_eq!(parent("/usr"), "/");
/// assert_eq!(parent("/"), "");
/// assert_eq!(parent("name"), "");
/// ```
#[must_use]
pub fn parent(path: &str) -> &str {
    let trimmed = trim_trailing_separators(path);
    match trimmed.rfind(SEPARATOR) {
        Some(pos) if pos + 1 < trimmed.len() => parent_at(trimmed, pos),
        _ => "",
    }
}

/// Return the last segment of a path.
///
/// A bare name is its own last segment.
///
/// # Examples
///
/// ```
/// use pathkit::path::decompose::file_name;
///
/// assert_eq!(file_name("/etc/hosts"), "hosts");
/// assert_eq!(file_name("/etc/"), "etc");
/// assert_eq!(file_name("hosts"), "hosts");
/// assert_eq!(file_name("/"), "");
/// ```
#[must_use]
pub fn file_name(path: &str) -> &str {
    let trimmed = trim_trailing_separators(path);
    match trimmed.rfind(SEPARATOR) {
        Some(pos) => &trimmed[pos + 1..],
        None => trimmed,
    }
}

/// Drop the first segment of a path.
///
/// # Examples
///
/// ```
/// use pathkit::path::decompose::subpath;
///
/// assert_eq!(subpath("abc/def"), "def");
/// assert_eq!(subpath("/abc/def/ghi"), "def/ghi");
/// assert_eq!(subpath("abc"), "");
/// ```
#[must_use]
pub fn subpath(path: &str) -> &str {
    let trimmed = trim_leading_separators(path);
    match trimmed.find(SEPARATOR) {
        Some(pos) => &trimmed[pos + 1..],
        None => "",
    }
}

/// Everything before the separator at `pos`, or the root itself when the
/// separator is the leading one.
fn parent_at(trimmed: &str, pos: usize) -> &str {
    if pos == 0 {
        &trimmed[..SEPARATOR.len_utf8()]
    } else {
        &trimmed[..pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_trailing() {
        assert_eq!(trim_trailing_separators("/a/b"), "/a/b");
        assert_eq!(trim_trailing_separators("/a/b/"), "/a/b");
        assert_eq!(trim_trailing_separators("a//"), "a");
        assert_eq!(trim_trailing_separators("/"), "/");
        assert_eq!(trim_trailing_separators("////"), "/");
        assert_eq!(trim_trailing_separators(""), "");
    }

    #[test]
    fn test_trim_leading() {
        assert_eq!(trim_leading_separators("///a/b/"), "a/b/");
        assert_eq!(trim_leading_separators("a"), "a");
        assert_eq!(trim_leading_separators(""), "");
    }

    #[test]
    fn test_split_nested() {
        let split = split("/a/b/").unwrap();
        assert_eq!(split.parent(), "/a");
        assert_eq!(split.name(), "b");
    }

    #[test]
    fn test_split_under_root() {
        let split = split("/a").unwrap();
        assert_eq!(split.parent(), "/");
        assert_eq!(split.name(), "a");
    }

    #[test]
    fn test_split_relative() {
        let split = split("a/b/c").unwrap();
        assert_eq!(split.parent(), "a/b");
        assert_eq!(split.name(), "c");
    }

    #[test]
    fn test_split_bare_name_fails() {
        let err = split("name").unwrap_err();
        assert!(matches!(err, Error::MissingParent { ref path } if path == "name"));
    }

    #[test]
    fn test_split_root_and_empty_fail() {
        assert!(split("/").is_err());
        assert!(split("///").is_err());
        assert!(split("").is_err());
    }

    #[test]
    fn test_split_is_literal() {
        let split = split("/a/..").unwrap();
        assert_eq!(split.parent(), "/a");
        assert_eq!(split.name(), "..");
    }

    #[test]
    fn test_parent() {
        assert_eq!(parent("/a/b/c"), "/a/b");
        assert_eq!(parent("/a/b/c///"), "/a/b");
        assert_eq!(parent("/a"), "/");
        assert_eq!(parent("a/b"), "a");
        assert_eq!(parent("a"), "");
        assert_eq!(parent(""), "");
    }

    #[test]
    fn test_parent_of_root_is_empty() {
        assert_eq!(parent("/"), "");
        assert_eq!(parent("//"), "");
    }

    #[test]
    fn test_parent_keeps_inner_redundant_separators() {
        assert_eq!(parent("/a//b"), "/a/");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("/a/b/c"), "c");
        assert_eq!(file_name("/a/b/c/"), "c");
        assert_eq!(file_name("c"), "c");
        assert_eq!(file_name("/"), "");
        assert_eq!(file_name(""), "");
    }

    #[test]
    fn test_subpath() {
        assert_eq!(subpath("abc/def"), "def");
        assert_eq!(subpath("//abc/def/"), "def/");
        assert_eq!(subpath("abc"), "");
        assert_eq!(subpath("/"), "");
    }

    #[test]
    fn test_split_agrees_with_parent_and_file_name() {
        for path in ["/a/b/c", "/x", "rel/name", "/deep/er/path//"] {
            let split = split(path).unwrap();
            assert_eq!(split.parent(), parent(path));
            assert_eq!(split.name(), file_name(path));
        }
    }

    // Property-based tests
    mod property_tests {
        use super::*;
        use crate::path::normalize::trim_path;
        use proptest::prelude::*;

        fn canonical_path_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec("[a-z0-9_.-]{1,8}", 1..=6)
                .prop_filter("no dot segments", |parts| {
                    parts.iter().all(|p| p != "." && p != "..")
                })
                .prop_map(|parts| format!("/{}", parts.join("/")))
        }

        proptest! {
            /// parent + "/" + file_name normalizes back to the input
            #[test]
            fn parent_file_name_round_trip(p in canonical_path_strategy()) {
                let rebuilt = format!("{}/{}", parent(&p), file_name(&p));
                prop_assert_eq!(trim_path(&rebuilt).unwrap(), p);
            }

            /// Trailing separators never change the decomposition
            #[test]
            fn trailing_separators_ignored(p in canonical_path_strategy(), extra in 1usize..4) {
                let padded = format!("{p}{}", "/".repeat(extra));
                prop_assert_eq!(parent(&padded), parent(&p));
                prop_assert_eq!(file_name(&padded), file_name(&p));
            }

            /// Parent extraction always shortens the path
            #[test]
            fn parent_is_shorter(p in canonical_path_strategy()) {
                prop_assert!(parent(&p).len() < p.len());
            }
        }
    }
}
