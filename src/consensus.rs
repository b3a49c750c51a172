//! Corruption-tolerant secret reconstruction by subset consensus
//!
//! Every k-subset of the available shares is interpolated at zero. Honest
//! shares all lie on the same polynomial, so every subset drawn only from
//! them yields the true secret; a subset containing a corrupted share almost
//! always yields something else. The value produced by the most subsets wins.
//!
//! Ties between equally frequent values go to the value that was produced
//! first in enumeration order (see [`Combinations`]).

use std::collections::HashMap;

use num_bigint::BigInt;
use tracing::{debug, trace, warn};

use crate::domain::{Point, ShareSet};
use crate::error::ReconstructError;
use crate::interpolate::lagrange_at_zero;
use crate::rational::ExactRational;
use crate::subsets::{Combinations, combination_count};

/// One distinct candidate secret and how many subsets produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyEntry {
    pub value: ExactRational,
    pub count: usize,
    /// The first subset that produced this value; never overwritten
    pub witness: Vec<Point>,
}

/// Occurrence counts per candidate secret, in first-seen order
#[derive(Debug, Default)]
pub struct Tally {
    entries: Vec<TallyEntry>,
    positions: HashMap<ExactRational, usize>,
}

impl Tally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one more subset producing `value`
    ///
    /// `witness` is only evaluated the first time `value` is seen.
    pub fn record(&mut self, value: ExactRational, witness: impl FnOnce() -> Vec<Point>) {
        if let Some(&pos) = self.positions.get(&value) {
            self.entries[pos].count += 1;
            return;
        }
        self.positions.insert(value.clone(), self.entries.len());
        self.entries.push(TallyEntry {
            value,
            count: 1,
            witness: witness(),
        });
    }

    /// Entries in the order their values were first seen
    #[must_use]
    pub fn entries(&self) -> &[TallyEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of recorded subsets
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// The most frequent value; among equals, the one seen first
    #[must_use]
    pub fn winner(&self) -> Option<&TallyEntry> {
        self.entries.iter().fold(None, |best, entry| match best {
            Some(b) if b.count >= entry.count => Some(b),
            _ => Some(entry),
        })
    }
}

/// Outcome of a reconstruction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconstructionResult {
    /// The consensus secret, exact
    pub value: ExactRational,
    /// The shares whose interpolation first produced `value`
    pub witness: Vec<Point>,
    /// Number of subsets that produced `value`
    pub agreeing_subsets: usize,
    /// Number of subsets evaluated
    pub total_subsets: usize,
}

impl ReconstructionResult {
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.value.is_integer()
    }

    /// The secret as an integer, if it is one
    #[must_use]
    pub fn integer_value(&self) -> Option<BigInt> {
        self.value.to_exact_integer()
    }
}

/// Reconstructs the secret from `shares` with threshold `threshold`
///
/// Interpolates every `threshold`-subset of `shares` (in lexicographic order
/// over the x-sorted shares) and selects the value most subsets agree on.
///
/// # Errors
/// - [`ReconstructError::InsufficientShares`] if fewer than `threshold` shares are present
/// - [`ReconstructError::NoConsensus`] if no subset was evaluated (threshold of zero)
/// - [`ReconstructError::DivideByZero`] if interpolation hits a repeated x
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigInt;
/// use shamir_quorum::consensus::reconstruct;
/// use shamir_quorum::domain::{Point, ShareSet};
///
/// // y = 2x + 1
/// let shares = ShareSet::new(vec![Point::new(1, 3), Point::new(2, 5), Point::new(3, 7)]).unwrap();
/// let result = reconstruct(&shares, 2).unwrap();
///
/// assert_eq!(result.integer_value(), Some(BigInt::from(1)));
/// assert_eq!(result.agreeing_subsets, 3);
/// ```
pub fn reconstruct(
    shares: &ShareSet,
    threshold: usize,
) -> Result<ReconstructionResult, ReconstructError> {
    let points = shares.points();
    if points.len() < threshold {
        return Err(ReconstructError::InsufficientShares {
            required: threshold,
            available: points.len(),
        });
    }

    debug!(
        shares = points.len(),
        threshold,
        subsets = %combination_count(points.len(), threshold),
        "Evaluating share subsets"
    );

    let mut tally = Tally::new();
    for subset in Combinations::new(points.len(), threshold) {
        let selected: Vec<&Point> = subset.iter().map(|&i| &points[i]).collect();
        let value = lagrange_at_zero(&selected)?;
        trace!(?subset, %value, "Interpolated subset");
        tally.record(value, || selected.iter().map(|&p| p.clone()).collect());
    }

    let total_subsets = tally.total();
    let winner = tally.winner().ok_or(ReconstructError::NoConsensus)?;

    debug!(
        candidates = tally.entries().len(),
        agreeing = winner.count,
        total = total_subsets,
        "Selected consensus secret"
    );
    if winner.count * 2 <= total_subsets {
        warn!(
            agreeing = winner.count,
            total = total_subsets,
            "Consensus secret is not backed by a strict majority of subsets"
        );
    }

    Ok(ReconstructionResult {
        value: winner.value.clone(),
        witness: winner.witness.clone(),
        agreeing_subsets: winner.count,
        total_subsets,
    })
}
