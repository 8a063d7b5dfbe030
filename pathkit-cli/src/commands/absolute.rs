//! Absolute path commands.

use crate::error::CliError;
use crate::utils::{working_dir, GlobalOptions};
use clap::Args;
use pathkit::path::{is_absolute, make_absolute};

/// Exit successfully if the path is absolute, with status 1 otherwise.
#[derive(Args)]
pub struct IsAbsoluteCommand {
    /// Path to test
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl IsAbsoluteCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if is_absolute(&self.path) {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "not an absolute path: {:?}",
                self.path
            )))
        }
    }
}

/// Prefix a relative path with the working directory.
///
/// The result is not normalized; use `resolve` for that.
#[derive(Args)]
pub struct AbsoluteCommand {
    /// Path to complete
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Working directory to prefix (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<String>,
}

impl AbsoluteCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if is_absolute(&self.path) {
            println!("{}", self.path);
            return Ok(());
        }

        let cwd = working_dir(self.cwd)?;
        println!("{}", make_absolute(&self.path, &cwd));
        Ok(())
    }
}
