// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed repository and home directory plus
// a recording logger, so each integration test can exercise the installer
// against a real filesystem without touching the user's actual $HOME.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use dotlink::installer::Installer;
use dotlink::logging::Log;

/// One log line recorded by [`RecordingLog`]: `(level, message)`.
pub type RecordedLine = (String, String);

/// A [`Log`] implementation that records every message in emission order.
///
/// Integration tests use this to assert the exact log sequence an install
/// or uninstall run produced, without capturing process stdout.
#[derive(Debug, Default)]
pub struct RecordingLog {
    lines: Mutex<Vec<RecordedLine>>,
}

impl RecordingLog {
    /// Create an empty recording log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of all recorded `(level, message)` lines in order.
    pub fn lines(&self) -> Vec<RecordedLine> {
        self.lines
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Return only the recorded levels, in order.
    pub fn levels(&self) -> Vec<String> {
        self.lines().into_iter().map(|(level, _)| level).collect()
    }

    fn push(&self, level: &str, message: &str) {
        self.lines
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push((level.to_string(), message.to_string()));
    }
}

impl Log for RecordingLog {
    fn info(&self, msg: &str) {
        self.push("info", msg);
    }

    fn warn(&self, msg: &str) {
        self.push("warn", msg);
    }

    fn debug(&self, msg: &str) {
        self.push("debug", msg);
    }
}

/// An isolated repository root and home directory, both backed by
/// [`tempfile::TempDir`] and deleted automatically on drop.
#[derive(Debug)]
pub struct TestEnv {
    /// Temporary dotfiles repository root.
    pub root: tempfile::TempDir,
    /// Temporary stand-in for the user's home directory.
    pub home: tempfile::TempDir,
    /// Recording logger shared with installers built by [`installer`](Self::installer).
    pub log: Arc<RecordingLog>,
}

impl TestEnv {
    /// Create a fresh environment with empty root and home directories.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create repo tempdir"),
            home: tempfile::tempdir().expect("create home tempdir"),
            log: Arc::new(RecordingLog::new()),
        }
    }

    /// Write a source file (and any parent directories) under the
    /// repository root.
    pub fn write_source(&self, relative: &str, contents: &str) {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create source parent dir");
        }
        std::fs::write(&path, contents).expect("write source file");
    }

    /// Build an installer rooted in this environment, pre-loaded with the
    /// given (source, destination) mappings.
    pub fn installer(&self, mappings: &[(&str, &str)]) -> Installer {
        let mut installer = Installer::new(
            self.root.path().to_path_buf(),
            self.home.path().to_path_buf(),
            Arc::clone(&self.log) as Arc<dyn Log>,
        );
        installer.add(mappings.iter().copied());
        installer
    }

    /// Absolute destination path under the temporary home directory.
    pub fn home_path(&self, name: &str) -> PathBuf {
        self.home.path().join(name)
    }

    /// Absolute source path under the temporary repository root.
    pub fn root_path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }
}

/// Assert that `path` is a symlink pointing at `target`.
pub fn assert_links_to(path: &Path, target: &Path) {
    let meta = path
        .symlink_metadata()
        .unwrap_or_else(|_| panic!("expected a symlink at {}", path.display()));
    assert!(meta.is_symlink(), "{} is not a symlink", path.display());
    assert_eq!(
        std::fs::read_link(path).expect("read symlink target"),
        target,
        "symlink at {} points elsewhere",
        path.display()
    );
}
