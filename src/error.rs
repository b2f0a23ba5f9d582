//! Typed errors for symlink creation and removal.
//!
//! Every variant is a per-instruction failure: the install/uninstall loops
//! log it at `warn` and continue with the next instruction. Nothing here
//! aborts a run.
use std::path::PathBuf;

use thiserror::Error;

/// Why a single symlink step failed.
///
/// Display text matches the log output exactly, so the warn line a user
/// sees and the error a test asserts on are the same string.
#[derive(Error, Debug)]
pub enum LinkError {
    /// The destination is already occupied by a filesystem entry — a file,
    /// directory, or symlink (broken or not). Raised by install.
    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),

    /// No filesystem entry exists at the destination. Raised by uninstall.
    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),

    /// The destination exists but is not a symbolic link. Raised by
    /// uninstall; guards against deleting a real file that happens to
    /// occupy the target path.
    #[error("{} is not a symlink", .0.display())]
    NotASymlink(PathBuf),

    /// Unexpected filesystem error (permission denied, I/O failure).
    /// Treated as another skip-and-continue case rather than a fatal
    /// fault.
    #[error("{}: {}", .path.display(), .source)]
    Io {
        /// Path the operation was acting on.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn already_exists_display() {
        let e = LinkError::AlreadyExists(PathBuf::from("/home/user/.bashrc"));
        assert_eq!(e.to_string(), "/home/user/.bashrc already exists");
    }

    #[test]
    fn not_found_display() {
        let e = LinkError::NotFound(PathBuf::from("/home/user/.bashrc"));
        assert_eq!(e.to_string(), "/home/user/.bashrc does not exist");
    }

    #[test]
    fn not_a_symlink_display() {
        let e = LinkError::NotASymlink(PathBuf::from("/home/user/.bashrc"));
        assert_eq!(e.to_string(), "/home/user/.bashrc is not a symlink");
    }

    #[test]
    fn io_display_includes_path_and_cause() {
        let e = LinkError::Io {
            path: PathBuf::from("/home/user/.bashrc"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert!(e.to_string().contains("/home/user/.bashrc"));
        assert!(e.to_string().contains("permission denied"));
    }

    #[test]
    fn io_has_source() {
        use std::error::Error as StdError;
        let e = LinkError::Io {
            path: PathBuf::from("/x"),
            source: io::Error::other("boom"),
        };
        assert!(e.source().is_some());
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn link_error_is_send_sync() {
        assert_send_sync::<LinkError>();
    }

    #[test]
    fn link_error_converts_to_anyhow() {
        let e = LinkError::NotFound(PathBuf::from("/x"));
        let _anyhow_err: anyhow::Error = e.into();
    }
}
