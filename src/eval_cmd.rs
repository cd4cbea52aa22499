//! Eval command: perform one arithmetic operation and print the result.

use abacus_arith::Calculator;
use anyhow::Result;
use tracing::info;

use crate::cli::{EvalArgs, Op};

/// Apply the selected operation to the two operands.
///
/// A division-by-zero error propagates to `main` unchanged, so the process
/// exits 1 with the domain error message.
pub fn run(args: EvalArgs) -> Result<()> {
    let calc = Calculator::new();
    let result = match args.op {
        Op::Add => calc.add(args.a, args.b),
        Op::Subtract => calc.subtract(args.a, args.b),
        Op::Multiply => calc.multiply(args.a, args.b),
        Op::Divide => calc.divide(args.a, args.b)?,
    };
    info!(op = ?args.op, a = args.a, b = args.b, result, "evaluated");
    println!("{result}");
    Ok(())
}
