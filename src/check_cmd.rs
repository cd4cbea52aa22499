//! Check command: run the automated verification pipeline.
//!
//! Mirrors the classic test-runner script: unit tests and coverage are
//! blocking, lint and format findings are warnings unless `deny_warnings`
//! is set in `abacus.toml`.

use anyhow::{Result, bail};
use tracing::warn;

use crate::cli::CheckArgs;
use crate::config::AbacusConfig;
use crate::runner::{StageOutcome, run_stage};

/// Run the verification pipeline.
pub fn run(args: CheckArgs) -> Result<()> {
    let config = AbacusConfig::load(&args.config)?;
    let check = &config.check;

    println!("Automated verification pipeline");
    println!("{}", "=".repeat(60));

    let mut outcomes: Vec<StageOutcome> = Vec::new();

    // 1. Unit tests (always run, always blocking)
    banner("Unit Tests");
    outcomes.push(run_stage(
        "Unit Tests",
        "cargo",
        &["test", "--workspace"],
        true,
    )?);

    // 2. Coverage
    if check.coverage {
        banner("Coverage Report");
        outcomes.push(run_stage(
            "Coverage Report",
            "cargo",
            &["llvm-cov", "--workspace"],
            true,
        )?);
    }

    // 3. Lint
    if check.lint {
        banner("Linting Check");
        outcomes.push(run_stage(
            "Linting Check",
            "cargo",
            &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
            check.deny_warnings,
        )?);
    }

    // 4. Format
    if check.fmt {
        banner("Code Formatting Check");
        outcomes.push(run_stage(
            "Code Formatting Check",
            "cargo",
            &["fmt", "--all", "--check"],
            check.deny_warnings,
        )?);
    }

    summarize(&outcomes)
}

/// Print the separator banner shown before each stage.
fn banner(name: &str) {
    println!();
    println!("{}", "=".repeat(60));
    println!("Running: {name}");
    println!("{}", "=".repeat(60));
}

/// Print the final summary and map it to the process exit contract:
/// success iff every blocking stage passed.
fn summarize(outcomes: &[StageOutcome]) -> Result<()> {
    for o in outcomes.iter().filter(|o| !o.passed && !o.blocking) {
        warn!(stage = o.name, "issues found (non-blocking)");
    }

    let failed: Vec<&str> = outcomes
        .iter()
        .filter(|o| !o.passed && o.blocking)
        .map(|o| o.name)
        .collect();

    println!();
    println!("{}", "=".repeat(60));
    if failed.is_empty() {
        println!("✓ All checks passed successfully!");
        println!("{}", "=".repeat(60));
        Ok(())
    } else {
        println!("✗ Some checks failed!");
        println!("{}", "=".repeat(60));
        bail!("blocking stages failed: {}", failed.join(", "))
    }
}
