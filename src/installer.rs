//! The installer: an ordered list of symlink instructions and the
//! best-effort install/uninstall loops.
//!
//! Instructions are processed strictly in registration order. A failed
//! step is logged at `warn` and skipped; the loop never aborts and never
//! rolls back. Callers that need to know what happened inspect the
//! returned [`Outcome`] list rather than scraping log text.
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::LinkError;
use crate::logging::Log;
use crate::paths;
use crate::symlink::{self, LinkAction};

/// One desired symlink: an immutable pair of absolute paths.
///
/// `source` is the file inside the managing repository; `destination` is
/// where the symlink is created under the home directory. Fields are
/// private — an instruction never changes after construction. Duplicates
/// are permitted; the installer performs no deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    source: PathBuf,
    destination: PathBuf,
}

impl Instruction {
    pub(crate) const fn new(source: PathBuf, destination: PathBuf) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Absolute path of the file inside the repository.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Absolute path where the symlink is created.
    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

/// Result of one install or uninstall step.
#[derive(Debug)]
pub struct Outcome {
    /// Destination path the step acted on.
    pub destination: PathBuf,
    /// What happened: the performed action, or the typed failure reason.
    pub result: Result<LinkAction, LinkError>,
}

impl Outcome {
    /// Whether this step failed.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.result.is_err()
    }
}

/// Accumulates [`Instruction`]s and performs install/uninstall actions,
/// logging each outcome.
///
/// Created empty (apart from its root, home, and injected logger), mutated
/// only by [`add`](Self::add) during setup, and read-only thereafter —
/// [`install`](Self::install) and [`uninstall`](Self::uninstall) touch the
/// filesystem, never the instruction list.
pub struct Installer {
    root: PathBuf,
    home: PathBuf,
    log: Arc<dyn Log>,
    instructions: Vec<Instruction>,
}

impl fmt::Debug for Installer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Installer")
            .field("root", &self.root)
            .field("home", &self.home)
            .field("log", &"<dyn Log>")
            .field("instructions", &self.instructions)
            .finish()
    }
}

impl Installer {
    /// Create an installer with no registered instructions.
    #[must_use]
    pub const fn new(root: PathBuf, home: PathBuf, log: Arc<dyn Log>) -> Self {
        Self {
            root,
            home,
            log,
            instructions: Vec::new(),
        }
    }

    /// Register one or more (source, destination) mappings.
    ///
    /// Sources are resolved relative to the repository root; destinations
    /// land under the home directory by basename (see
    /// [`paths::destination_path`]). Does not touch the filesystem, does
    /// not validate that sources exist, and does not deduplicate.
    pub fn add<'a, I>(&mut self, mappings: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (source, destination) in mappings {
            let source = paths::source_path(&self.root, source);
            let destination = paths::destination_path(&self.home, destination);
            self.instructions.push(Instruction::new(source, destination));
        }
    }

    /// Registered instructions, in registration order.
    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Create a symlink for every registered instruction, in order.
    ///
    /// Best-effort: a failed step is logged at `warn` and skipped, and
    /// every remaining instruction is still processed. Re-running after a
    /// successful install reports [`LinkError::AlreadyExists`] for every
    /// instruction and mutates nothing.
    #[must_use = "inspect the outcomes to learn whether any step failed"]
    pub fn install(&self) -> Vec<Outcome> {
        self.instructions
            .iter()
            .map(|instruction| {
                self.log.info(&format!(
                    "Installing: {} => {}",
                    instruction.destination().display(),
                    instruction.source().display()
                ));
                let result = symlink::create(instruction.source(), instruction.destination());
                self.report(&result);
                Outcome {
                    destination: instruction.destination.clone(),
                    result,
                }
            })
            .collect()
    }

    /// Remove the symlink for every registered instruction, in order.
    ///
    /// Only symlinks are removed; a regular file or directory at a
    /// destination is reported as [`LinkError::NotASymlink`] and left
    /// intact. Same best-effort semantics as [`install`](Self::install).
    #[must_use = "inspect the outcomes to learn whether any step failed"]
    pub fn uninstall(&self) -> Vec<Outcome> {
        self.instructions
            .iter()
            .map(|instruction| {
                self.log.info(&format!(
                    "Uninstalling: {}",
                    instruction.destination().display()
                ));
                let result = symlink::remove(instruction.destination());
                self.report(&result);
                Outcome {
                    destination: instruction.destination.clone(),
                    result,
                }
            })
            .collect()
    }

    fn report(&self, result: &Result<LinkAction, LinkError>) {
        match result {
            Ok(_) => self.log.debug("\tSuccess."),
            Err(error) => self.log.warn(&format!("\tError: {error}, skipping!")),
        }
    }
}
