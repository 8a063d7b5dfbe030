//! Main entry point for the pathkit CLI.
//!
//! This is the command-line interface for the pathkit path library.
//! It exposes every library operation as a subcommand:
//! - `normalize`, `resolve`: canonicalize path strings
//! - `split`, `parent`, `file-name`, `subpath`: take paths apart
//! - `is-absolute`, `absolute`: absolute path handling
//! - `self-path`, `root`, `home`, `cwd`: locate the program and user
//! - `mkdir`: create a directory tree

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use pathkit::logging::init_logger_or;
use pathkit::LogLevel;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    let config = utils::load_configuration(cli.config.as_deref());

    // Initialize logging from flags, environment, then configuration
    let fallback = config
        .as_ref()
        .ok()
        .and_then(|c| c.log_mode.as_deref())
        .and_then(|mode| LogLevel::parse(mode).ok())
        .unwrap_or(LogLevel::Normal);
    let logger = init_logger_or(cli.verbose, cli.quiet, fallback);
    if !logger.install() {
        logger.debug("a log backend was already installed; keeping it");
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    };

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        quiet: cli.quiet,
        config,
        logger,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Split(cmd) => cmd.execute(&global),
        cli::Command::Parent(cmd) => cmd.execute(&global),
        cli::Command::FileName(cmd) => cmd.execute(&global),
        cli::Command::Subpath(cmd) => cmd.execute(&global),
        cli::Command::TrimTrailing(cmd) => cmd.execute(&global),
        cli::Command::TrimLeading(cmd) => cmd.execute(&global),
        cli::Command::IsAbsolute(cmd) => cmd.execute(&global),
        cli::Command::Absolute(cmd) => cmd.execute(&global),
        cli::Command::Escape(cmd) => cmd.execute(&global),
        cli::Command::Tokenize(cmd) => cmd.execute(&global),
        cli::Command::SelfPath(cmd) => cmd.execute(&global),
        cli::Command::Root(cmd) => cmd.execute(&global),
        cli::Command::Home(cmd) => cmd.execute(&global),
        cli::Command::Cwd(cmd) => cmd.execute(&global),
        cli::Command::Mkdir(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            global.logger.debug(&format!("{e:?}"));
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
