//! Division-by-zero boundary cases.

use abacus_arith::{ArithError, Calculator};

#[test]
fn divide_by_zero_positive_dividend() {
    let calc = Calculator::new();
    let result = calc.divide(10.0, 0.0);
    assert!(matches!(
        result,
        Err(ArithError::DivisionByZero { dividend }) if dividend == 10.0
    ));
}

#[test]
fn divide_by_zero_negative_dividend() {
    let calc = Calculator::new();
    let result = calc.divide(-3.5, 0.0);
    assert!(matches!(
        result,
        Err(ArithError::DivisionByZero { dividend }) if dividend == -3.5
    ));
}

#[test]
fn divide_zero_by_zero() {
    // x = 0 is not special: the divisor decides.
    let calc = Calculator::new();
    assert!(matches!(
        calc.divide(0.0, 0.0),
        Err(ArithError::DivisionByZero { .. })
    ));
}

#[test]
fn divide_by_negative_zero() {
    // -0.0 compares equal to zero and must error, not produce -inf.
    let calc = Calculator::new();
    assert!(matches!(
        calc.divide(1.0, -0.0),
        Err(ArithError::DivisionByZero { .. })
    ));
}

#[test]
fn divide_by_near_zero_succeeds() {
    // Only an exactly-zero divisor is rejected.
    let calc = Calculator::new();
    assert!(calc.divide(1.0, 1e-300).is_ok());
    assert!(calc.divide(1.0, -1e-300).is_ok());
}

#[test]
fn error_message_names_division_by_zero() {
    let calc = Calculator::new();
    let err = calc.divide(10.0, 0.0).unwrap_err();
    assert_eq!(err.to_string(), "division by zero: 10 / 0");
}
