//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `normalize`, `resolve`: canonical path strings
//! - `split`, `parent`, `file_name`, `subpath`, `trim_*`: literal decomposition
//! - `is_absolute`, `absolute`: absolute path detection and completion
//! - `escape`: backslash-escape separators
//! - `tokenize`: split on a delimiter set
//! - `self_path`, `root`, `home`, `cwd`: locating the program and user
//! - `mkdir`: recursive directory creation
//! - `completions`: shell completion scripts

pub mod absolute;
pub mod completions;
pub mod decompose;
pub mod escape;
pub mod locate;
pub mod mkdir;
pub mod normalize;
pub mod tokenize;

pub use absolute::{AbsoluteCommand, IsAbsoluteCommand};
pub use completions::CompletionsCommand;
pub use decompose::{
    FileNameCommand, ParentCommand, SplitCommand, SubpathCommand, TrimLeadingCommand,
    TrimTrailingCommand,
};
pub use escape::EscapeCommand;
pub use locate::{CwdCommand, HomeCommand, RootCommand, SelfPathCommand};
pub use mkdir::MkdirCommand;
pub use normalize::{NormalizeCommand, ResolveCommand};
pub use tokenize::TokenizeCommand;
