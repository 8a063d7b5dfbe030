//! String-level path handling.
//!
//! Everything in this module operates on `/`-separated path strings and
//! performs no filesystem access. Two families of operations live here:
//!
//! # Normalization
//!
//! [`normalize::trim_path`] produces the canonical form of a path by
//! collapsing redundant separators and resolving `.` and `..` segments.
//! It is strict: a `..` that would climb above the root of an absolute
//! path, or past the first segment of a relative path, is rejected rather
//! than clamped.
//!
//! ```
//! use pathkit::path::normalize::trim_path;
//!
//! assert_eq!(trim_path("/a/./b/../c").unwrap(), "/a/c");
//! assert_eq!(trim_path("/").unwrap(), "/");
//! assert!(trim_path("/a/../..").is_err());
//! ```
//!
//! # Decomposition
//!
//! The [`decompose`] functions slice the literal input string without
//! interpreting `.` or `..`. Trailing separators are always discarded
//! first, so `/a/b///` decomposes exactly like `/a/b`.
//!
//! ```
//! use pathkit::path::decompose::{file_name, parent, split};
//!
//! assert_eq!(parent("/usr/local/bin/"), "/usr/local");
//! assert_eq!(file_name("/usr/local/bin/"), "bin");
//!
//! let split = split("/a/b/").unwrap();
//! assert_eq!(split.parent(), "/a");
//! assert_eq!(split.name(), "b");
//! ```

pub mod absolute;
pub mod decompose;
pub mod escape;
pub mod normalize;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

/// The character dividing path segments.
pub const SEPARATOR: char = '/';

// Re-export key types and functions
pub use absolute::{complete_full_path, is_absolute, make_absolute};
pub use decompose::{file_name, parent, split, subpath};
pub use escape::escape_separators;
pub use normalize::{resolve, trim_path};
pub use types::SplitPath;
