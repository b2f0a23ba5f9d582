//! The `install` subcommand.
use std::sync::Arc;

use anyhow::Result;

use crate::cli::GlobalOpts;
use crate::logging::Log;
use crate::{manifest, paths};

/// Run the install command.
///
/// Builds the manifest installer and creates a symlink for every managed
/// mapping. Individual failures are logged and skipped by the installer;
/// the command itself fails only in aggregate, after every instruction has
/// been attempted.
///
/// # Errors
///
/// Returns an error if `HOME` is unset, the repository root cannot be
/// resolved, or any instruction failed.
pub fn run(global: &GlobalOpts, log: &Arc<dyn Log>) -> Result<()> {
    let root = paths::resolve_root(global.root.as_deref())?;
    let home = paths::home_dir()?;

    let installer = manifest::installer(root, home, Arc::clone(log));
    let outcomes = installer.install();
    super::fail_on_errors(&outcomes)
}
