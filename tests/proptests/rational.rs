//! Property tests for exact rational arithmetic

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use shamir_quorum::ExactRational;

fn is_reduced(value: &ExactRational) -> bool {
    value.denominator().is_positive() && value.numerator().gcd(value.denominator()).is_one()
}

fn frac(n: i64, d: i64) -> Option<ExactRational> {
    ExactRational::new(BigInt::from(n), BigInt::from(d)).ok()
}

/// Every constructed value is in lowest terms with a positive denominator
#[quickcheck]
fn prop_constructor_reduces(n: i64, d: i64) -> TestResult {
    let Some(value) = frac(n, d) else {
        return TestResult::from_bool(d == 0);
    };
    TestResult::from_bool(is_reduced(&value))
}

/// Arithmetic results stay reduced
#[quickcheck]
fn prop_operations_stay_reduced(a: (i64, i64), b: (i64, i64)) -> TestResult {
    let (Some(x), Some(y)) = (frac(a.0, a.1), frac(b.0, b.1)) else {
        return TestResult::discard();
    };

    let mut results = vec![&x + &y, &x - &y, &x * &y, -&x];
    if !y.is_zero() {
        results.push(x.checked_div(&y).unwrap());
    }
    TestResult::from_bool(results.iter().all(is_reduced))
}

/// Scaling numerator and denominator by the same factor gives an equal value
#[quickcheck]
fn prop_equal_under_scaling(n: i32, d: i32, factor: i32) -> TestResult {
    if d == 0 || factor == 0 {
        return TestResult::discard();
    }
    let plain = frac(i64::from(n), i64::from(d));
    let scaled = frac(
        i64::from(n) * i64::from(factor),
        i64::from(d) * i64::from(factor),
    );
    TestResult::from_bool(plain.is_some() && plain == scaled)
}

/// x - x == 0 and (x / y) * y == x
#[quickcheck]
fn prop_inverse_operations(a: (i64, i64), b: (i64, i64)) -> TestResult {
    let (Some(x), Some(y)) = (frac(a.0, a.1), frac(b.0, b.1)) else {
        return TestResult::discard();
    };
    if y.is_zero() {
        return TestResult::discard();
    }
    let quotient = x.checked_div(&y).unwrap();
    TestResult::from_bool((&x - &x).is_zero() && &quotient * &y == x)
}

/// Whole values convert to integers, others do not
#[quickcheck]
fn prop_exact_integer(n: i64, d: i64) -> TestResult {
    let Some(value) = frac(n, d) else {
        return TestResult::discard();
    };
    let divides = (BigInt::from(n) % BigInt::from(d)).is_zero();
    TestResult::from_bool(value.to_exact_integer().is_some() == divides)
}
