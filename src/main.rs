mod check_cmd;
mod cli;
mod config;
mod eval_cmd;
mod logging;
mod report_cmd;
mod runner;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Eval(args) => eval_cmd::run(args),
        Command::Check(args) => check_cmd::run(args),
        Command::Report(args) => report_cmd::run(args),
    }
}
