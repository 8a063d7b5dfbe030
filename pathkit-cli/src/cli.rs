//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AbsoluteCommand, CompletionsCommand, CwdCommand, EscapeCommand, FileNameCommand,
    HomeCommand, IsAbsoluteCommand, MkdirCommand, NormalizeCommand, ParentCommand,
    ResolveCommand, RootCommand, SelfPathCommand, SplitCommand, SubpathCommand,
    TokenizeCommand, TrimLeadingCommand, TrimTrailingCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for normalizing paths and preparing directory trees.
#[derive(Parser)]
#[command(name = "pathkit")]
#[command(version, about = "Normalize, take apart, and create filesystem paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read configuration from this file instead of <root>/etc/pathkit.yaml
    #[arg(long, value_name = "PATH", global = true, env = "PATHKIT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Collapse separators, `.` and `..` in a path
    Normalize(NormalizeCommand),

    /// Make a path absolute, then normalize it
    Resolve(ResolveCommand),

    /// Print the parent and last segment of a path
    Split(SplitCommand),

    /// Print the parent of a path
    Parent(ParentCommand),

    /// Print the last segment of a path
    FileName(FileNameCommand),

    /// Print a path without its first segment
    Subpath(SubpathCommand),

    /// Strip trailing separators
    TrimTrailing(TrimTrailingCommand),

    /// Strip leading separators
    TrimLeading(TrimLeadingCommand),

    /// Succeed if the path is absolute
    IsAbsolute(IsAbsoluteCommand),

    /// Prefix a relative path with the working directory
    Absolute(AbsoluteCommand),

    /// Put a backslash before every separator
    Escape(EscapeCommand),

    /// Split a string on a set of delimiter characters
    Tokenize(TokenizeCommand),

    /// Print the path of the pathkit executable
    SelfPath(SelfPathCommand),

    /// Print the install root of the pathkit executable
    Root(RootCommand),

    /// Print the home directory
    Home(HomeCommand),

    /// Print the current working directory
    Cwd(CwdCommand),

    /// Create a directory and any missing parents
    Mkdir(MkdirCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
