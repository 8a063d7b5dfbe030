//! Error types for the pathkit library.
//!
//! Every fallible operation in the crate reports failure through [`Error`]
//! rather than panicking, so callers decide how to recover.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathkit error.
///
/// # Examples
///
/// ```
/// use pathkit::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/usr/local".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathkit library.
#[derive(Debug, Error)]
pub enum Error {
    /// A `..` segment would climb above the root of an absolute path, or
    /// past the first segment of a relative one.
    #[error("malformed path '{path}': {reason}")]
    MalformedPath {
        /// The path as supplied by the caller.
        path: String,
        /// Why the path was rejected.
        reason: String,
    },

    /// A parent/name split was requested on a path without a separator.
    #[error("path '{path}' has no parent component")]
    MissingParent {
        /// The path that could not be split.
        path: String,
    },

    /// A working directory used to resolve relative paths is not absolute.
    #[error("working directory '{cwd}' is not absolute")]
    RelativeWorkingDir {
        /// The working directory as supplied by the caller.
        cwd: String,
    },

    /// The location of the running executable could not be determined.
    #[error("cannot determine executable path: {source}")]
    SelfPathUnavailable {
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// The current working directory could not be determined.
    #[error("cannot determine current directory: {source}")]
    CurrentDirUnavailable {
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// A required environment variable is unset or not valid unicode.
    #[error("environment variable {name} is not set")]
    EnvVarUnset {
        /// Name of the variable.
        name: String,
    },

    /// A path returned by the OS is not valid UTF-8.
    #[error("path is not valid UTF-8: {}", path.display())]
    NonUtf8Path {
        /// The lossy form of the offending path.
        path: PathBuf,
    },

    /// The user's home directory could not be determined.
    #[error("cannot determine home directory")]
    HomeUnavailable,

    /// The executable does not live two levels below an install root.
    #[error("cannot derive install root from {}", program.display())]
    RootUnavailable {
        /// The executable path the root was derived from.
        program: PathBuf,
    },

    /// A path exists but is not a directory.
    #[error("not a directory: {}", path.display())]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// Creating a directory failed and it still does not exist.
    #[error("cannot create directory {}: {source}", path.display())]
    CreateDirectory {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error indicates a malformed `..` sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Error;
    ///
    /// let err = Error::MalformedPath {
    ///     path: "/..".to_string(),
    ///     reason: "escapes root".to_string(),
    /// };
    /// assert!(err.is_malformed());
    /// ```
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedPath { .. })
    }

    /// Check if error indicates a non-directory where a directory was needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::NotADirectory { path: PathBuf::from("/etc/passwd") };
    /// assert!(err.is_not_a_directory());
    /// ```
    #[must_use]
    pub fn is_not_a_directory(&self) -> bool {
        matches!(self, Self::NotADirectory { .. })
    }

    /// Check if error came from one of the OS lookups (executable path,
    /// working directory, environment, home directory).
    #[must_use]
    pub fn is_environment_failure(&self) -> bool {
        matches!(
            self,
            Self::SelfPathUnavailable { .. }
                | Self::CurrentDirUnavailable { .. }
                | Self::EnvVarUnset { .. }
                | Self::HomeUnavailable
                | Self::RootUnavailable { .. }
                | Self::NonUtf8Path { .. }
        )
    }
}
