//! Command-line interface definitions.

use clap::{Parser, Subcommand};

/// Top-level CLI entry point for the dotfiles symlink installer.
#[derive(Parser, Debug)]
#[command(
    name = "dotlink",
    about = "Personal dotfiles symlink installer",
    version
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output (also honoured via the VERBOSE environment variable)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared across all subcommands.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Override the dotfiles repository root directory
    #[arg(long, global = true)]
    pub root: Option<std::path::PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create symlinks in $HOME for every managed dotfile
    Install,
    /// Remove previously installed symlinks from $HOME
    Uninstall,
    /// Print version information
    Version,
}
