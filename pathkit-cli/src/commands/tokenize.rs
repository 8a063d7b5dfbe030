//! Command to split a string on a set of delimiter characters.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use pathkit::split::split_any;

/// Print the non-empty tokens of a string, one per line.
#[derive(Args)]
pub struct TokenizeCommand {
    /// String to split
    #[arg(value_name = "STRING", allow_hyphen_values = true)]
    pub input: String,

    /// Characters that separate tokens; any one of them splits
    #[arg(long, short = 'd', value_name = "CHARS", default_value = "/")]
    pub delimiters: String,
}

impl TokenizeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if self.delimiters.is_empty() {
            return Err(CliError::InvalidArguments(
                "--delimiters must name at least one character".into(),
            ));
        }

        for token in split_any(&self.input, &self.delimiters) {
            println!("{token}");
        }
        Ok(())
    }
}
