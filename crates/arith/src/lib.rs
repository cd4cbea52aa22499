//! # abacus-arith
//!
//! Stateless four-operation arithmetic core: add, subtract, multiply and
//! divide over pairs of `f64` operands. Division by zero is the only
//! fallible case and is reported as a dedicated error variant so callers
//! can match on it specifically.
//!
//! ```
//! use abacus_arith::Calculator;
//!
//! let calc = Calculator::new();
//! assert_eq!(calc.add(2.0, 3.0), 5.0);
//! assert_eq!(calc.divide(5.0, 2.0)?, 2.5);
//! assert!(calc.divide(10.0, 0.0).is_err());
//! # Ok::<(), abacus_arith::ArithError>(())
//! ```

mod calculator;
mod error;

pub use calculator::Calculator;
pub use error::ArithError;
