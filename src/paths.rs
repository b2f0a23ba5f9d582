//! Repository-root and home-directory path resolution.
use std::path::{Path, PathBuf};

use anyhow::Result;

/// Environment variable overriding the repository root directory.
pub const ROOT_ENV: &str = "DOTLINK_ROOT";

/// The user's home directory, from `$HOME`.
///
/// Required but not validated for existence: destination paths are
/// resolved against whatever `$HOME` names.
///
/// # Errors
///
/// Returns an error if the `HOME` environment variable is not set.
pub fn home_dir() -> Result<PathBuf> {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .ok_or_else(|| anyhow::anyhow!("HOME environment variable is not set"))
}

/// Resolve the dotfiles repository root: the explicit `--root` argument,
/// the `DOTLINK_ROOT` environment variable, or the current directory.
///
/// Like `$HOME`, the result is not validated for existence.
///
/// # Errors
///
/// Returns an error only if the current directory cannot be determined.
pub fn resolve_root(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(root) = explicit {
        return Ok(root.to_path_buf());
    }
    if let Some(root) = std::env::var_os(ROOT_ENV) {
        return Ok(PathBuf::from(root));
    }
    Ok(std::env::current_dir()?)
}

/// Absolute source path for a mapping relative to the repository root.
#[must_use]
pub fn source_path(root: &Path, source: &str) -> PathBuf {
    root.join(source)
}

/// Absolute destination path: the destination's basename under the home
/// directory.
///
/// Only the final component matters — a mapping destination of
/// `shell/bashrc` still lands at `$HOME/bashrc`. Destinations with no
/// usable basename (e.g. `..`) are joined verbatim.
#[must_use]
pub fn destination_path(home: &Path, destination: &str) -> PathBuf {
    Path::new(destination)
        .file_name()
        .map_or_else(|| home.join(destination), |name| home.join(name))
}
