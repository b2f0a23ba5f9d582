//! Personal dotfiles symlink installer.
//!
//! Maps source files in a dotfiles repository to destination paths under
//! the user's home directory, creating and removing symlinks and logging
//! each outcome. Execution is single-threaded and best-effort: a failed
//! step is logged at `warn` and skipped, never aborting the run.
//!
//! The public API is organised into four layers:
//!
//! - **[`paths`]** — repository-root and home-directory resolution
//! - **[`symlink`]** — create/remove symlink primitives and their guards
//! - **[`installer`]** — [`Installer`](installer::Installer), its instruction list, and outcomes
//! - **[`commands`]** — top-level subcommand orchestration (`install`, `uninstall`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod installer;
pub mod logging;
pub mod manifest;
pub mod paths;
pub mod symlink;
