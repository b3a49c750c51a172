//! Enumeration of k-element index subsets
//!
//! [`Combinations`] walks all `C(n, k)` strictly increasing index sequences in
//! lexicographic order using an index "odometer": no recursion and no
//! up-front materialisation of the whole family.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Lazy iterator over every k-subset of `0..n`, in lexicographic order
///
/// The first index varies slowest. The sequence is fully determined by
/// `(n, k)`, so a fresh iterator always replays the same order.
///
/// When `k == 0` or `k > n` the iterator is empty.
///
/// # Examples
///
/// ```rust
/// use shamir_quorum::subsets::Combinations;
///
/// let all: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
/// assert_eq!(
///     all,
///     vec![
///         vec![0, 1], vec![0, 2], vec![0, 3],
///         vec![1, 2], vec![1, 3],
///         vec![2, 3],
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    exhausted: bool,
}

impl Combinations {
    #[must_use]
    pub fn new(n: usize, k: usize) -> Self {
        let exhausted = k == 0 || k > n;
        Self {
            n,
            indices: if exhausted { Vec::new() } else { (0..k).collect() },
            exhausted,
        }
    }

    /// Moves the odometer to the next subset, or marks it exhausted
    fn advance(&mut self) {
        let k = self.indices.len();

        // Rightmost position that can still be incremented: position i may
        // hold at most n - k + i.
        let Some(pos) = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) else {
            self.exhausted = true;
            return;
        };

        self.indices[pos] += 1;
        for i in pos + 1..k {
            self.indices[i] = self.indices[i - 1] + 1;
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let current = self.indices.clone();
        self.advance();
        Some(current)
    }
}

/// Exact binomial coefficient `C(n, k)`
///
/// Matches the number of items [`Combinations::new`] yields for `1 <= k <= n`.
#[must_use]
pub fn combination_count(n: usize, k: usize) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    let k = k.min(n - k);
    (0..k).fold(BigUint::one(), |acc, i| acc * (n - i) / (i + 1))
}
