//! Lagrange interpolation evaluated at x = 0
//!
//! For points `(x_i, y_i)` the constant term of the interpolating polynomial is
//!
//! ```text
//! f(0) = Σ_i y_i · Π_{j≠i} (0 - x_j) / (x_i - x_j)
//! ```
//!
//! All arithmetic is exact, so the same points always give the same value.

use crate::domain::Point;
use crate::error::ReconstructError;
use crate::rational::ExactRational;

/// Evaluates the unique polynomial of degree `< points.len()` through `points` at zero
///
/// The x-coordinates must be pairwise distinct. [`ShareSet`](crate::domain::ShareSet)
/// guarantees this; if it is violated anyway the repeated x surfaces as
/// [`ReconstructError::DivideByZero`].
///
/// An empty slice evaluates to zero.
///
/// # Errors
/// Returns [`ReconstructError::DivideByZero`] if two points share an x-coordinate
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigInt;
/// use shamir_quorum::domain::Point;
/// use shamir_quorum::interpolate::lagrange_at_zero;
///
/// // y = 2x + 1
/// let a = Point::new(1, 3);
/// let b = Point::new(2, 5);
/// let secret = lagrange_at_zero(&[&a, &b]).unwrap();
/// assert_eq!(secret.to_exact_integer(), Some(BigInt::from(1)));
/// ```
pub fn lagrange_at_zero(points: &[&Point]) -> Result<ExactRational, ReconstructError> {
    let mut sum = ExactRational::zero();

    for (i, point_i) in points.iter().enumerate() {
        let mut basis = ExactRational::one();

        for (j, point_j) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let numerator = ExactRational::from_integer(-&point_j.x);
            let denominator = ExactRational::from_integer(&point_i.x - &point_j.x);
            basis = &basis * &numerator.checked_div(&denominator)?;
        }

        let term = &ExactRational::from_integer(point_i.y.clone()) * &basis;
        sum = &sum + &term;
    }

    Ok(sum)
}
