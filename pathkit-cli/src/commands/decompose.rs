//! Commands that slice a path as written.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use pathkit::path::decompose::{
    file_name, parent, split, subpath, trim_leading_separators, trim_trailing_separators,
};

/// Print the parent and last segment of a path on separate lines.
#[derive(Args)]
pub struct SplitCommand {
    /// Path to split
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl SplitCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let (parent, name) = split(&self.path)?.into_parts();
        println!("{parent}");
        println!("{name}");
        Ok(())
    }
}

/// Print the parent of a path, or an empty line if it has none.
#[derive(Args)]
pub struct ParentCommand {
    /// Path whose parent to print
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl ParentCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", parent(&self.path));
        Ok(())
    }
}

/// Print the last segment of a path.
#[derive(Args)]
pub struct FileNameCommand {
    /// Path whose last segment to print
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl FileNameCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", file_name(&self.path));
        Ok(())
    }
}

/// Print a path with its first segment removed.
#[derive(Args)]
pub struct SubpathCommand {
    /// Path to shorten
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl SubpathCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", subpath(&self.path));
        Ok(())
    }
}

/// Strip trailing separators.
#[derive(Args)]
pub struct TrimTrailingCommand {
    /// Path to trim
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl TrimTrailingCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", trim_trailing_separators(&self.path));
        Ok(())
    }
}

/// Strip leading separators.
#[derive(Args)]
pub struct TrimLeadingCommand {
    /// Path to trim
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl TrimLeadingCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", trim_leading_separators(&self.path));
        Ok(())
    }
}
