//! The fixed set of dotfiles managed by this repository.
use std::path::PathBuf;
use std::sync::Arc;

use crate::installer::Installer;
use crate::logging::Log;

/// Managed dotfiles as (source, destination) pairs.
///
/// Sources are relative to the repository root; destinations land in the
/// home directory under their basename.
pub const MAPPINGS: &[(&str, &str)] = &[
    ("shell/bashrc", ".bashrc"),
    ("shell/profile", ".profile"),
    ("git/gitconfig", ".gitconfig"),
];

/// Build an [`Installer`] pre-loaded with every managed mapping.
///
/// This is the single configuration point: callers construct the installer
/// here, then invoke [`Installer::install`] or [`Installer::uninstall`].
#[must_use]
pub fn installer(root: PathBuf, home: PathBuf, log: Arc<dyn Log>) -> Installer {
    let mut installer = Installer::new(root, home, log);
    installer.add(MAPPINGS.iter().copied());
    installer
}
