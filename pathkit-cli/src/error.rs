//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use pathkit::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Configuration error.
    Config(String),

    /// Semantic failure (e.g., path is not absolute) - exit code 1.
    SemanticFailure(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (e.g., malformed path, predicate false)
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::Library(lib_err) => match lib_err {
                LibError::MalformedPath { .. }
                | LibError::MissingParent { .. }
                | LibError::NotADirectory { .. } => 1,
                LibError::CreateDirectory { .. } | LibError::Io(_) => 5,
                LibError::RelativeWorkingDir { .. } => 4,
                _ => 6,
            },
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        if matches!(
            e,
            LibError::Configuration(_) | LibError::Validation { .. }
        ) {
            CliError::Config(e.to_string())
        } else {
            CliError::Library(e)
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_path_is_semantic_failure() {
        let err = CliError::from(LibError::MalformedPath {
            path: "/..".into(),
            reason: "climbs".into(),
        });
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_validation_maps_to_config() {
        let err = CliError::from(LibError::Validation {
            field: "dir_mode".into(),
            message: "too large".into(),
        });
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.exit_code(), 7);
    }

    #[test]
    fn test_other_library_errors() {
        assert_eq!(CliError::from(LibError::HomeUnavailable).exit_code(), 6);
        assert_eq!(CliError::InvalidArguments("x".into()).exit_code(), 4);
    }

    #[test]
    fn test_relative_working_dir_is_invalid_argument() {
        let err = CliError::from(LibError::RelativeWorkingDir { cwd: "rel".into() });
        assert_eq!(err.exit_code(), 4);
    }
}
