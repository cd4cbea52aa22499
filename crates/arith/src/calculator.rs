use crate::error::ArithError;

/// Stateless arithmetic calculator over pairs of numbers.
///
/// Holds no fields, so every call depends only on its operands; a single
/// instance can be reused across calls or threads, or rebuilt per call,
/// with identical results.
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    /// Create a calculator.
    pub fn new() -> Self {
        Self
    }

    /// Sum `a + b`.
    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    /// Difference `a - b`.
    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    /// Product `a * b`.
    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    /// Quotient `a / b`.
    ///
    /// The result is a floating-point quotient even when the division is
    /// exact, e.g. `divide(10.0, 2.0)` yields `5.0`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::DivisionByZero`] when `b` is zero (`-0.0`
    /// counts as zero). This is the only error condition in the crate.
    pub fn divide(&self, a: f64, b: f64) -> Result<f64, ArithError> {
        if b == 0.0 {
            return Err(ArithError::DivisionByZero { dividend: a });
        }
        Ok(a / b)
    }
}
