//! Error types for the abacus-arith crate.

/// Error type for all fallible operations in the abacus-arith crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ArithError {
    /// Returned when the divisor operand is zero.
    #[error("division by zero: {dividend} / 0")]
    DivisionByZero {
        /// The dividend the caller tried to divide.
        dividend: f64,
    },
}
