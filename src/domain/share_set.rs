//! `ShareSet`: the ordered collection of shares used for one reconstruction

use crate::error::ReconstructError;

use super::Point;

/// Shares sorted ascending by x
///
/// Invariant: no two shares have the same x (enforced at construction).
/// Interpolating through a repeated x would divide by zero, so the
/// duplicate is reported up front instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareSet {
    points: Vec<Point>,
}

impl ShareSet {
    /// Sorts the points by x and validates that every x is distinct
    ///
    /// # Errors
    /// Returns [`ReconstructError::DuplicateShareIndex`] if two points share an x
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir_quorum::domain::{Point, ShareSet};
    ///
    /// let shares = ShareSet::new(vec![Point::new(3, 7), Point::new(1, 3)]).unwrap();
    /// assert_eq!(shares.points()[0], Point::new(1, 3));
    ///
    /// assert!(ShareSet::new(vec![Point::new(1, 3), Point::new(1, 4)]).is_err());
    /// ```
    pub fn new(mut points: Vec<Point>) -> Result<Self, ReconstructError> {
        points.sort_by(|a, b| a.x.cmp(&b.x));
        if let Some(pair) = points.windows(2).find(|pair| pair[0].x == pair[1].x) {
            return Err(ReconstructError::DuplicateShareIndex(pair[0].x.clone()));
        }
        Ok(Self { points })
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
