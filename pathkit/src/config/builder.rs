//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::schema::{Config, MAX_DIR_MODE};
use crate::error::{Error, Result};
use crate::logging::LogLevel;

/// Builds a [`Config`] from defaults, a configuration file, the
/// environment, and programmatic overrides, in increasing precedence.
///
/// # Examples
///
/// ```
/// use pathkit::config::{Config, ConfigBuilder, DirMode};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         dir_mode: Some(DirMode::new(0o700)),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.effective_dir_mode(), 0o700);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads the default file and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read configuration from `path` instead of the default location.
    ///
    /// Unlike the default location, an explicitly named file must exist.
    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Do not read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `PATHKIT_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Assemble and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed,
    /// an environment variable is invalid, or the merged result fails
    /// validation.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            if let Some(file) = self.load_file()? {
                config.merge(file);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = self.overrides {
            config.merge(overrides);
        }

        validate(&config)?;
        Ok(config)
    }

    fn load_file(&self) -> Result<Option<Config>> {
        if let Some(ref path) = self.file {
            return ConfigLoader::load_file(path).map(Some);
        }

        match ConfigLoader::default_path() {
            Ok(path) => ConfigLoader::load_optional(&path),
            Err(e) => {
                log::debug!("skipping default configuration file: {e}");
                Ok(None)
            }
        }
    }
}

/// Check a merged configuration for out-of-range values.
///
/// # Errors
///
/// Returns [`Error::Validation`] naming the first invalid field.
pub fn validate(config: &Config) -> Result<()> {
    if let Some(mode) = config.dir_mode {
        if mode.bits() > MAX_DIR_MODE {
            return Err(Error::Validation {
                field: "dir_mode".into(),
                message: format!("mode {mode} exceeds 0o{MAX_DIR_MODE:o}"),
            });
        }
    }

    if let Some(ref level) = config.log_mode {
        LogLevel::parse(level).map_err(|message| Error::Validation {
            field: "log_mode".into(),
            message,
        })?;
    }

    Ok(())
}
