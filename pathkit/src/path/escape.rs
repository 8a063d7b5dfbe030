//! Escaping paths for embedding in regular expressions.

use crate::path::SEPARATOR;

/// Insert a backslash before every separator.
///
/// The result can be dropped into a pattern whose delimiter is `/` (as in
/// `sed s/.../.../` or `/.../` regex literals) and still match the
/// separators literally.
///
/// # Examples
///
/// ```
/// use pathkit::path::escape::escape_separators;
///
/// assert_eq!(escape_separators("/a/b/c"), r"\/a\/b\/c");
/// assert_eq!(escape_separators("plain"), "plain");
/// ```
#[must_use]
pub fn escape_separators(path: &str) -> String {
    let mut escaped = String::with_capacity(path.len() + path.len() / 4);
    for c in path.chars() {
        if c == SEPARATOR {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
