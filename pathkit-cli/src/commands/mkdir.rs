//! Command to create a directory tree.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use pathkit::config::DirMode;
use pathkit::ensure_dir_recursive;
use pathkit::path::{complete_full_path, trim_path};

/// Create a directory and any missing parents.
///
/// Existing directories are left alone, so running the command twice is
/// harmless. Relative paths are resolved against the current directory.
#[derive(Args)]
pub struct MkdirCommand {
    /// Directory to create
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Permission mode for new directories, in octal (default: from config, else 0o755)
    #[arg(long, short = 'm', value_name = "OCTAL")]
    pub mode: Option<String>,
}

impl MkdirCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mode = match self.mode {
            Some(ref raw) => DirMode::parse(raw)
                .map_err(|e| CliError::InvalidArguments(e.to_string()))?
                .bits(),
            None => global.config.effective_dir_mode(),
        };

        let target = trim_path(&complete_full_path(&self.path)?)?;
        global
            .logger
            .debug(&format!("ensuring {target} with mode {mode:o}"));

        let created = ensure_dir_recursive(&target, mode)?;
        if created.is_empty() {
            global.logger.info(&format!("{target} already exists"));
        }
        for dir in &created {
            global.logger.info(&format!("created {}", dir.display()));
        }
        Ok(())
    }
}
