//! Locating the running program and the user's environment.
//!
//! Every function here queries the operating system afresh on each call.
//! Nothing is cached, since the working directory or environment may change
//! between calls.
//!
//! The install root of a program is derived from the convention
//! `<root>/bin/<program>`: the root is the parent of the parent of the
//! executable.
//!
//! ```
//! use pathkit::locate::root_path_of;
//!
//! assert_eq!(root_path_of("/opt/tool/bin/tool").unwrap(), "/opt/tool");
//! assert!(root_path_of("/tool").is_err());
//! ```

use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::path::decompose::parent;

/// Suffix Linux appends to `/proc/self/exe` when the binary was replaced or
/// removed after it started.
const DELETED_SUFFIX: &str = " (deleted)";

/// Absolute path of the running executable.
///
/// # Errors
///
/// Returns [`Error::SelfPathUnavailable`] if the OS cannot report it, or
/// [`Error::NonUtf8Path`] if it is not valid UTF-8.
pub fn self_path() -> Result<String> {
    let mut path = env::current_exe().map_err(|source| Error::SelfPathUnavailable { source })?;

    if !path.exists() {
        if let Some(corrected) = path
            .to_str()
            .and_then(|s| s.strip_suffix(DELETED_SUFFIX))
            .map(PathBuf::from)
        {
            log::debug!(
                "executable was replaced, using {} instead",
                corrected.display()
            );
            path = corrected;
        }
    }

    into_utf8(path)
}

/// The process's current working directory.
///
/// # Errors
///
/// Returns [`Error::CurrentDirUnavailable`] if the directory cannot be read
/// (for example because it was removed), or [`Error::NonUtf8Path`].
pub fn current_dir() -> Result<String> {
    let cwd = env::current_dir().map_err(|source| Error::CurrentDirUnavailable { source })?;
    into_utf8(cwd)
}

/// Value of the environment variable `name`.
///
/// # Errors
///
/// Returns [`Error::EnvVarUnset`] if the variable is unset or not unicode.
pub fn env_var(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::EnvVarUnset {
        name: name.to_string(),
    })
}

/// The current user's home directory.
///
/// On Unix this is `$HOME` when set, falling back to the password database.
///
/// # Errors
///
/// Returns [`Error::HomeUnavailable`] if no home directory can be found, or
/// [`Error::NonUtf8Path`].
pub fn home_dir() -> Result<String> {
    let home = home::home_dir().ok_or(Error::HomeUnavailable)?;
    into_utf8(home)
}

/// Install root for an executable living at `<root>/bin/<program>`.
///
/// # Errors
///
/// Returns [`Error::RootUnavailable`] if `program` is not at least two
/// levels below some directory.
pub fn root_path_of(program: &str) -> Result<String> {
    let root = parent(parent(program));
    if root.is_empty() {
        return Err(Error::RootUnavailable {
            program: PathBuf::from(program),
        });
    }
    Ok(root.to_string())
}

/// Install root of the running executable.
///
/// # Errors
///
/// Fails if the executable path cannot be determined or does not follow
/// the `<root>/bin/<program>` layout.
pub fn root_path() -> Result<String> {
    root_path_of(&self_path()?)
}

fn into_utf8(path: PathBuf) -> Result<String> {
    path.into_os_string()
        .into_string()
        .map_err(|raw| Error::NonUtf8Path {
            path: PathBuf::from(raw),
        })
}
