//! Build script for pathkit-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    let path_arg = || Arg::new("path").value_name("PATH").required(true);
    let cwd_arg = || {
        Arg::new("cwd")
            .long("cwd")
            .value_name("DIR")
            .help("Working directory to resolve against (default: current directory)")
    };

    Command::new("pathkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize, take apart, and create filesystem paths")
        .long_about(
            "Command-line front end for the pathkit library: normalizes `/`-separated paths, \
             takes them apart, locates the running program, and creates directory trees",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file instead of <root>/etc/pathkit.yaml")
                .value_name("PATH")
                .global(true)
                .env("PATHKIT_CONFIG"),
        )
        .subcommands(vec![
            Command::new("normalize")
                .about("Collapse separators, `.` and `..` in a path")
                .long_about("Print the canonical form of a path; exit 1 if `..` climbs too far")
                .arg(path_arg()),
            Command::new("resolve")
                .about("Make a path absolute, then normalize it")
                .arg(path_arg())
                .arg(cwd_arg()),
            Command::new("split")
                .about("Print the parent and last segment of a path")
                .arg(path_arg()),
            Command::new("parent")
                .about("Print the parent of a path")
                .arg(path_arg()),
            Command::new("file-name")
                .about("Print the last segment of a path")
                .arg(path_arg()),
            Command::new("subpath")
                .about("Print a path without its first segment")
                .arg(path_arg()),
            Command::new("trim-trailing")
                .about("Strip trailing separators")
                .arg(path_arg()),
            Command::new("trim-leading")
                .about("Strip leading separators")
                .arg(path_arg()),
            Command::new("is-absolute")
                .about("Succeed if the path is absolute")
                .arg(path_arg()),
            Command::new("absolute")
                .about("Prefix a relative path with the working directory")
                .arg(path_arg())
                .arg(cwd_arg()),
            Command::new("escape")
                .about("Put a backslash before every separator")
                .arg(path_arg()),
            Command::new("tokenize")
                .about("Split a string on a set of delimiter characters")
                .arg(Arg::new("input").value_name("STRING").required(true))
                .arg(
                    Arg::new("delimiters")
                        .long("delimiters")
                        .short('d')
                        .value_name("CHARS")
                        .default_value("/")
                        .help("Characters that separate tokens; any one of them splits"),
                ),
            Command::new("self-path").about("Print the path of the pathkit executable"),
            Command::new("root")
                .about("Print the install root of the pathkit executable")
                .arg(
                    Arg::new("program")
                        .long("program")
                        .value_name("PROGRAM")
                        .help("Derive the root of this program path instead"),
                ),
            Command::new("home").about("Print the home directory"),
            Command::new("cwd").about("Print the current working directory"),
            Command::new("mkdir")
                .about("Create a directory and any missing parents")
                .long_about(
                    "Create a directory tree; existing directories are left alone, so the \
                     command is safe to repeat",
                )
                .arg(path_arg())
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .short('m')
                        .value_name("OCTAL")
                        .help("Permission mode for new directories (default: from config, else 0o755)"),
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    // Generate man pages at build time
    let out_dir = std::env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR not set"))?;
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("pathkit.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
