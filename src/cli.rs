use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Abacus four-operation arithmetic calculator.
#[derive(Parser)]
#[command(
    name = "abacus",
    version,
    about = "Four-operation arithmetic calculator with a verification pipeline"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Evaluate a single arithmetic operation.
    Eval(EvalArgs),
    /// Run unit tests, coverage, lint and format checks.
    Check(CheckArgs),
    /// Run the full verification pipeline with a printed report.
    Report(ReportArgs),
}

/// Operation selector for the `eval` subcommand.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Op {
    /// a + b
    Add,
    /// a - b
    Subtract,
    /// a * b
    Multiply,
    /// a / b (errors when b is zero)
    Divide,
}

/// Arguments for the `eval` subcommand.
#[derive(clap::Args)]
pub struct EvalArgs {
    /// Operation to perform.
    #[arg(value_enum)]
    pub op: Op,

    /// Left operand.
    pub a: f64,

    /// Right operand.
    pub b: f64,
}

/// Arguments for the `check` subcommand.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "abacus.toml")]
    pub config: PathBuf,
}

/// Arguments for the `report` subcommand.
#[derive(clap::Args)]
pub struct ReportArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "abacus.toml")]
    pub config: PathBuf,
}
