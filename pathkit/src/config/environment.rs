//! Environment variable handling for configuration overrides.

use crate::config::schema::{Config, DirMode};
use crate::error::{Error, Result};
use crate::logging::LogLevel;
use std::env;

/// Overrides the directory creation mode (octal).
pub const DIR_MODE_VAR: &str = "PATHKIT_DIR_MODE";

/// Overrides the log verbosity.
pub const LOG_MODE_VAR: &str = "PATHKIT_LOG_MODE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathkit::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `PATHKIT_*` environment variables to `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(mode) = env::var(DIR_MODE_VAR) {
            config.dir_mode = Some(DirMode::parse(&mode).map_err(|_| Error::Validation {
                field: DIR_MODE_VAR.into(),
                message: format!("'{mode}' is not an octal permission mode"),
            })?);
        }

        if let Ok(level) = env::var(LOG_MODE_VAR) {
            LogLevel::parse(&level).map_err(|message| Error::Validation {
                field: LOG_MODE_VAR.into(),
                message,
            })?;
            config.log_mode = Some(level);
        }

        Ok(())
    }
}
