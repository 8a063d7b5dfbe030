//! Value types produced by path decomposition.

use std::fmt;

use crate::path::SEPARATOR;

/// A path split into its parent and its last segment.
///
/// Both halves borrow from the string that was split. The parent is `/`
/// when the last segment sits directly under the root.
///
/// # Examples
///
/// ```
/// use pathkit::path::split;
///
/// let split = split("/usr/bin").unwrap();
/// assert_eq!(split.parent(), "/usr");
/// assert_eq!(split.name(), "bin");
/// assert_eq!(split.to_string(), "/usr/bin");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SplitPath<'a> {
    parent: &'a str,
    name: &'a str,
}

impl<'a> SplitPath<'a> {
    pub(crate) fn new(parent: &'a str, name: &'a str) -> Self {
        Self { parent, name }
    }

    /// The path leading up to the last segment.
    #[must_use]
    pub fn parent(&self) -> &'a str {
        self.parent
    }

    /// The last segment.
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Split into `(parent, name)`.
    #[must_use]
    pub fn into_parts(self) -> (&'a str, &'a str) {
        (self.parent, self.name)
    }
}

impl fmt::Display for SplitPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.parent.ends_with(SEPARATOR) {
            write!(f, "{}{}", self.parent, self.name)
        } else {
            write!(f, "{}{SEPARATOR}{}", self.parent, self.name)
        }
    }
}
