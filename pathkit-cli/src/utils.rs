//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading and working-directory lookup.

use crate::error::CliError;
use pathkit::path::is_absolute;
use pathkit::{locate, Config, ConfigBuilder, Logger};
use std::path::Path;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Merged configuration.
    pub config: Config,

    /// Logger for user-facing messages.
    pub logger: Logger,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. The configuration file (`--config`, or `<root>/etc/pathkit.yaml`)
/// 3. Built-in defaults (lowest priority)
pub fn load_configuration(config_file: Option<&Path>) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(path) = config_file {
        builder = builder.with_file(path);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// The working directory to complete relative paths against: `cwd` when
/// given, otherwise the process's current directory.
///
/// An explicit `cwd` must be absolute.
pub fn working_dir(cwd: Option<String>) -> Result<String, CliError> {
    match cwd {
        Some(dir) if !is_absolute(&dir) => Err(CliError::InvalidArguments(format!(
            "--cwd must be an absolute path, got '{dir}'"
        ))),
        Some(dir) => Ok(dir),
        None => Ok(locate::current_dir()?),
    }
}
