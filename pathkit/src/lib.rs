#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathkit
//!
//! A small library for working with `/`-separated filesystem paths.
//!
//! It lets a program locate its own install root, complete relative paths
//! against the working directory, normalize user-supplied paths, take paths
//! apart, and make sure a directory tree exists before use.
//!
//! ## Core Pieces
//!
//! - [`split`]: delimiter-based string tokenizing
//! - [`path`]: normalization, decomposition, absolute-path handling
//! - [`locate`]: executable path, working directory, home, install root
//! - [`ensure`]: idempotent, race-tolerant directory creation
//! - [`config`]: layered configuration
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathkit::path::{make_absolute, parent, trim_path};
//!
//! let full = trim_path(&make_absolute("proj/../proj2/./x", "/home/u")).unwrap();
//! assert_eq!(full, "/home/u/proj2/x");
//! assert_eq!(parent(&full), "/home/u/proj2");
//!
//! assert!(trim_path("/..").is_err());
//! ```

pub mod config;
pub mod ensure;
pub mod error;
pub mod locate;
pub mod logging;
pub mod path;
pub mod split;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use ensure::{ensure_dir, ensure_dir_recursive, DirStatus, DEFAULT_DIR_MODE};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{SplitPath, SEPARATOR};
