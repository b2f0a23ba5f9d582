//! Top-level subcommand orchestration.
pub mod install;
pub mod uninstall;

use anyhow::Result;

use crate::installer::Outcome;

/// Convert an outcome list into a command exit status.
///
/// The per-step log output has already been emitted by the installer; this
/// only decides whether the process as a whole reports failure.
fn fail_on_errors(outcomes: &[Outcome]) -> Result<()> {
    let failed = outcomes.iter().filter(|o| o.is_failure()).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} steps failed", outcomes.len());
    }
    Ok(())
}
