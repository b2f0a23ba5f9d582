//! Symlink create/remove primitives.
//!
//! POSIX symlinks only. Both operations are plain blocking calls; the
//! existence-check-then-act pattern is not safe against concurrent
//! external modification, which is accepted for single-user interactive
//! use.
use std::io::ErrorKind;
use std::path::Path;

use crate::error::LinkError;

/// Action performed by a successful symlink operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkAction {
    /// A symlink was created at the destination.
    Created,
    /// The symlink at the destination was removed.
    Removed,
}

/// Create a symbolic link at `destination` pointing to `source`.
///
/// Fails with [`LinkError::AlreadyExists`] if *any* entry occupies the
/// destination — file, directory, or symlink, broken or not. The check
/// uses `symlink_metadata` so a dangling symlink still counts as existing.
/// The source is not required to exist.
///
/// # Errors
///
/// [`LinkError::AlreadyExists`] when the destination is occupied, or
/// [`LinkError::Io`] when link creation itself fails.
pub fn create(source: &Path, destination: &Path) -> Result<LinkAction, LinkError> {
    if destination.symlink_metadata().is_ok() {
        return Err(LinkError::AlreadyExists(destination.to_path_buf()));
    }

    std::os::unix::fs::symlink(source, destination).map_err(|e| LinkError::Io {
        path: destination.to_path_buf(),
        source: e,
    })?;
    Ok(LinkAction::Created)
}

/// Remove the symbolic link at `destination`.
///
/// Refuses to touch anything that is not a symlink, so a regular file or
/// directory occupying the destination is left intact. The link is removed
/// regardless of where it currently points; no check is made that it still
/// points at the originally installed source.
///
/// # Errors
///
/// [`LinkError::NotFound`] when no entry exists at the destination,
/// [`LinkError::NotASymlink`] when the entry is not a symlink, or
/// [`LinkError::Io`] when the unlink itself fails.
pub fn remove(destination: &Path) -> Result<LinkAction, LinkError> {
    let meta = match destination.symlink_metadata() {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(LinkError::NotFound(destination.to_path_buf()));
        }
        Err(e) => {
            return Err(LinkError::Io {
                path: destination.to_path_buf(),
                source: e,
            });
        }
    };

    if !meta.is_symlink() {
        return Err(LinkError::NotASymlink(destination.to_path_buf()));
    }

    std::fs::remove_file(destination).map_err(|e| LinkError::Io {
        path: destination.to_path_buf(),
        source: e,
    })?;
    Ok(LinkAction::Removed)
}
