//! Property tests for subset enumeration and consensus reconstruction

use num_bigint::{BigInt, BigUint};
use quickcheck::{Arbitrary, Gen, TestResult};
use quickcheck_macros::quickcheck;
use shamir_quorum::consensus::reconstruct;
use shamir_quorum::domain::{Point, ShareSet};
use shamir_quorum::subsets::{Combinations, combination_count};
use std::collections::HashSet;

/// Wrapper for a polynomial and share parameters small enough to enumerate
#[derive(Clone, Debug)]
struct SharedPolynomial {
    /// Coefficients, constant term (the secret) first; length is the threshold
    coeffs: Vec<BigInt>,
    num_shares: usize,
}

impl Arbitrary for SharedPolynomial {
    fn arbitrary(g: &mut Gen) -> Self {
        // Threshold 1..=5 and 1..=8 shares keep C(n, k) small
        let threshold = usize::from(u8::arbitrary(g) % 5) + 1;
        let num_shares = threshold + usize::from(u8::arbitrary(g) % 4);

        let coeffs = (0..threshold).map(|_| BigInt::from(i64::arbitrary(g))).collect();

        SharedPolynomial { coeffs, num_shares }
    }
}

impl SharedPolynomial {
    fn threshold(&self) -> usize {
        self.coeffs.len()
    }

    fn secret(&self) -> &BigInt {
        &self.coeffs[0]
    }

    /// Shares at x = 1..=num_shares
    fn shares(&self) -> ShareSet {
        let points = (1..=self.num_shares)
            .map(|x| {
                let y = self
                    .coeffs
                    .iter()
                    .rev()
                    .fold(BigInt::from(0), |acc, c| acc * x + c);
                Point::new(BigInt::from(x), y)
            })
            .collect();
        ShareSet::new(points).expect("distinct x")
    }
}

/// Consistent shares: every subset agrees on the true secret
#[quickcheck]
fn prop_consistent_shares_unanimous(poly: SharedPolynomial) -> bool {
    let Ok(result) = reconstruct(&poly.shares(), poly.threshold()) else {
        return false;
    };
    result.integer_value().as_ref() == Some(poly.secret())
        && result.agreeing_subsets == result.total_subsets
        && BigUint::from(result.total_subsets)
            == combination_count(poly.num_shares, poly.threshold())
}

/// Same input, same result and witness
#[quickcheck]
fn prop_reconstruction_deterministic(ys: Vec<i32>, threshold: u8) -> TestResult {
    let points: Vec<Point> = ys
        .iter()
        .take(7)
        .enumerate()
        .map(|(i, &y)| Point::new(BigInt::from(i + 1), y))
        .collect();
    let threshold = usize::from(threshold % 4) + 1;
    if points.len() < threshold {
        return TestResult::discard();
    }

    let shares = ShareSet::new(points).expect("distinct x");
    let first = reconstruct(&shares, threshold);
    let second = reconstruct(&shares, threshold);
    TestResult::from_bool(first.is_ok() && first == second)
}

/// A single corrupted share is outvoted once honest shares can out-agree it
#[quickcheck]
fn prop_single_corruption_outvoted(poly: SharedPolynomial, victim: u8, delta: i64) -> TestResult {
    let k = poly.threshold();
    // With n = 2k + 1 the honest subsets, C(n - 1, k), outnumber all subsets
    // containing the corrupted share, C(n - 1, k - 1), so no wrong value can
    // collect as many votes as the secret.
    let n = 2 * k + 1;
    if k < 2 || delta == 0 {
        return TestResult::discard();
    }

    let poly = SharedPolynomial {
        num_shares: n,
        ..poly
    };
    let mut points = poly.shares().points().to_vec();
    let victim = usize::from(victim) % n;
    points[victim].y += delta;

    let Ok(result) = reconstruct(&ShareSet::new(points).expect("distinct x"), k) else {
        return TestResult::failed();
    };

    // Honest subsets exclude the victim
    let honest = combination_count(n - 1, k);
    TestResult::from_bool(
        result.integer_value().as_ref() == Some(poly.secret())
            && BigUint::from(result.agreeing_subsets) >= honest
            && result
                .witness
                .iter()
                .all(|p| p.x != BigInt::from(victim + 1)),
    )
}

/// Enumeration yields exactly C(n, k) distinct, increasing subsets
#[quickcheck]
fn prop_combinations_complete(n: u8, k: u8) -> bool {
    let n = usize::from(n % 10);
    let k = usize::from(k % 10);

    let all: Vec<Vec<usize>> = Combinations::new(n, k).collect();
    let expected = if k == 0 { BigUint::from(0_u32) } else { combination_count(n, k) };

    let distinct: HashSet<&Vec<usize>> = all.iter().collect();
    let mut sorted = all.clone();
    sorted.sort();

    BigUint::from(all.len()) == expected
        && distinct.len() == all.len()
        && sorted == all
        && all
            .iter()
            .all(|s| s.len() == k && s.windows(2).all(|w| w[0] < w[1]) && s.iter().all(|&i| i < n))
}
