//! Commands that produce canonical path strings.

use crate::error::CliError;
use crate::utils::{working_dir, GlobalOptions};
use clap::Args;
use pathkit::path::{resolve, trim_path};

/// Collapse repeated separators, `.` and `..` without touching the
/// filesystem.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path to normalize
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl NormalizeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", trim_path(&self.path)?);
        Ok(())
    }
}

/// Complete a path against the working directory, then normalize it.
#[derive(Args)]
pub struct ResolveCommand {
    /// Path to resolve
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Working directory to resolve against (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<String>,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let cwd = working_dir(self.cwd)?;
        global
            .logger
            .debug(&format!("resolving {:?} against {cwd}", self.path));

        println!("{}", resolve(&self.path, &cwd)?);
        Ok(())
    }
}
