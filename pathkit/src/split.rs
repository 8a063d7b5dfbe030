//! Delimiter-based string tokenizing.
//!
//! Splitting yields the maximal runs of non-delimiter characters, in order.
//! Runs of consecutive delimiters collapse, and leading or trailing
//! delimiters never produce empty tokens.

use crate::path::SEPARATOR;

/// Split `s` on any character contained in `delimiters`.
///
/// An empty `delimiters` set matches nothing, so a non-empty `s` comes back
/// as a single token.
///
/// # Examples
///
/// ```
/// use pathkit::split::split_any;
///
/// assert_eq!(split_any("a,b;;c", ",;"), vec!["a", "b", "c"]);
/// assert!(split_any("", ",").is_empty());
/// assert!(split_any(",,,", ",").is_empty());
/// ```
#[must_use]
pub fn split_any<'a>(s: &'a str, delimiters: &str) -> Vec<&'a str> {
    s.split(|c: char| delimiters.contains(c))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Split a path into its non-empty segments.
///
/// # Examples
///
/// ```
/// use pathkit::split::segments;
///
/// assert_eq!(segments("/a//b/"), vec!["a", "b"]);
/// assert_eq!(segments("./x/.."), vec![".", "x", ".."]);
/// ```
#[must_use]
pub fn segments(path: &str) -> Vec<&str> {
    path.split(SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .collect()
}
