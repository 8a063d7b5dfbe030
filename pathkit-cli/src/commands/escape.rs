//! Command to escape separators for use in `/`-delimited patterns.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use pathkit::path::escape_separators;

/// Print the path with a backslash before every `/`.
#[derive(Args)]
pub struct EscapeCommand {
    /// Path to escape
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl EscapeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", escape_separators(&self.path));
        Ok(())
    }
}
