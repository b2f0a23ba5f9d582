//! Binary entry point for the `dotlink` CLI.
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod installer;
mod logging;
mod manifest;
mod paths;
mod symlink;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let verbose = args.verbose || logging::env_verbose();
    logging::init_subscriber(verbose);
    let log: Arc<dyn logging::Log> = Arc::new(logging::Logger::new(verbose));

    match args.command {
        cli::Command::Install => commands::install::run(&args.global, &log),
        cli::Command::Uninstall => commands::uninstall::run(&args.global, &log),
        cli::Command::Version => {
            let version = option_env!("DOTLINK_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
            println!("dotlink {version}");
            Ok(())
        }
    }
}
