//! Commands that report where the program and the user are.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use pathkit::locate;

/// Print the absolute path of the running pathkit executable.
#[derive(Args)]
pub struct SelfPathCommand {}

impl SelfPathCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", locate::self_path()?);
        Ok(())
    }
}

/// Print the install root, the directory two levels above the executable.
#[derive(Args)]
pub struct RootCommand {
    /// Derive the root of this program path instead of the running executable
    #[arg(long, value_name = "PROGRAM")]
    pub program: Option<String>,
}

impl RootCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let root = match self.program {
            Some(program) => locate::root_path_of(&program)?,
            None => locate::root_path()?,
        };
        println!("{root}");
        Ok(())
    }
}

/// Print the current user's home directory.
#[derive(Args)]
pub struct HomeCommand {}

impl HomeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", locate::home_dir()?);
        Ok(())
    }
}

/// Print the current working directory.
#[derive(Args)]
pub struct CwdCommand {}

impl CwdCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", locate::current_dir()?);
        Ok(())
    }
}
