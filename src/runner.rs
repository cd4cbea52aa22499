//! Spawning of the external verification tools.
//!
//! The test harness, coverage tool and lint tool are opaque collaborators:
//! their output goes straight to the console and only the exit status is
//! inspected.

use std::process::Command;

use anyhow::{Context, Result};
use tracing::{debug, info};

/// Outcome of one external tool invocation.
pub struct StageOutcome {
    /// Human-readable stage name, e.g. "Unit Tests".
    pub name: &'static str,
    /// Whether the tool exited with status 0.
    pub passed: bool,
    /// Whether a failure of this stage fails the whole pipeline.
    pub blocking: bool,
}

/// Run one external tool with inherited stdio.
///
/// Returns an error only when the tool cannot be spawned at all; a nonzero
/// exit status is reported through [`StageOutcome::passed`].
pub fn run_stage(
    name: &'static str,
    program: &str,
    args: &[&str],
    blocking: bool,
) -> Result<StageOutcome> {
    info!(stage = name, program, "running stage");

    let status = Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("failed to spawn `{program}` for stage: {name}"))?;
    debug!(stage = name, code = ?status.code(), "stage finished");

    Ok(StageOutcome {
        name,
        passed: status.success(),
        blocking,
    })
}
