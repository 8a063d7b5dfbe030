//! Configuration file discovery and loading.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::locate;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Directory below the install root holding configuration files.
pub const CONFIG_DIR: &str = "etc";

/// Name of the configuration file.
pub const CONFIG_FILE: &str = "pathkit.yaml";

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use pathkit::config::ConfigLoader;
/// use std::path::Path;
///
/// if let Some(config) = ConfigLoader::load_optional(Path::new("/opt/app/etc/pathkit.yaml")).unwrap() {
///     println!("dir mode: {:o}", config.effective_dir_mode());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Load a configuration file if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_optional(path: &Path) -> Result<Option<Config>> {
        match Self::load_file(path) {
            Ok(config) => Ok(Some(config)),
            Err(Error::Io(e)) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no configuration at {}", path.display());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Default configuration file location: `<install root>/etc/pathkit.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the install root of the running executable
    /// cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        let root = locate::root_path()?;
        Ok(Self::path_under_root(&root))
    }

    /// Configuration file location for a given install root.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::config::ConfigLoader;
    /// use std::path::PathBuf;
    ///
    /// assert_eq!(
    ///     ConfigLoader::path_under_root("/opt/app"),
    ///     PathBuf::from("/opt/app/etc/pathkit.yaml")
    /// );
    /// ```
    #[must_use]
    pub fn path_under_root(root: &str) -> PathBuf {
        Path::new(root).join(CONFIG_DIR).join(CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/pathkit.yaml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_load_optional_nonexistent_is_none() {
        let result = ConfigLoader::load_optional(Path::new("/nonexistent/path/pathkit.yaml"));
        assert!(result.unwrap().is_none());
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "invalid: yaml: syntax:").unwrap();

        let result = ConfigLoader::load_optional(&config_path);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_load_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("pathkit.yaml");
        fs::write(&config_path, "dir_mode: 700\nlog_mode: quiet\n").unwrap();

        let config = ConfigLoader::load_file(&config_path).unwrap();
        assert_eq!(config.effective_dir_mode(), 0o700);
        assert_eq!(config.log_mode, Some("quiet".to_string()));
    }

    #[test]
    fn test_load_empty_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("pathkit.yaml");
        fs::write(&config_path, "\n").unwrap();

        assert_eq!(ConfigLoader::load_file(&config_path).unwrap(), Config::default());
    }

    #[test]
    fn test_path_under_root() {
        assert_eq!(
            ConfigLoader::path_under_root("/"),
            PathBuf::from("/etc/pathkit.yaml")
        );
    }
}
