//! Algebraic properties of the four operations over random operand pairs.

use abacus_arith::Calculator;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn random_operand(rng: &mut StdRng) -> f64 {
    rng.random_range(-1e6..1e6)
}

#[test]
fn add_is_commutative() {
    let calc = Calculator::new();
    let mut rng = rng();
    for _ in 0..1000 {
        let a = random_operand(&mut rng);
        let b = random_operand(&mut rng);
        assert_eq!(calc.add(a, b), calc.add(b, a));
    }
}

#[test]
fn multiply_is_commutative() {
    let calc = Calculator::new();
    let mut rng = rng();
    for _ in 0..1000 {
        let a = random_operand(&mut rng);
        let b = random_operand(&mut rng);
        assert_eq!(calc.multiply(a, b), calc.multiply(b, a));
    }
}

#[test]
fn subtract_self_is_zero() {
    let calc = Calculator::new();
    let mut rng = rng();
    for _ in 0..1000 {
        let a = random_operand(&mut rng);
        assert_eq!(calc.subtract(a, a), 0.0);
    }
}

#[test]
fn divide_self_is_one() {
    let calc = Calculator::new();
    let mut rng = rng();
    for _ in 0..1000 {
        let a = random_operand(&mut rng);
        if a == 0.0 {
            continue;
        }
        assert_eq!(calc.divide(a, a).unwrap(), 1.0);
    }
}

#[test]
fn divide_is_inverse_of_multiply() {
    let calc = Calculator::new();
    let mut rng = rng();
    for _ in 0..1000 {
        let a = random_operand(&mut rng);
        let mut b = random_operand(&mut rng);
        if b == 0.0 {
            b = 1.0;
        }
        let back = calc.multiply(calc.divide(a, b).unwrap(), b);
        // One rounding step each way, so compare with a relative tolerance.
        let tol = 1e-12 * a.abs().max(1.0);
        assert!(
            (back - a).abs() <= tol,
            "divide({a}, {b}) * {b} = {back}, expected ~{a}"
        );
    }
}

#[test]
fn divide_by_zero_for_random_dividends() {
    let calc = Calculator::new();
    let mut rng = rng();
    for _ in 0..100 {
        let a = random_operand(&mut rng);
        assert!(calc.divide(a, 0.0).is_err(), "divide({a}, 0) must error");
    }
}
