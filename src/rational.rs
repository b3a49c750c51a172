//! Exact rational arithmetic over arbitrary-precision integers

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::ReconstructError;

/// An exact fraction kept in lowest terms.
///
/// Invariants (enforced by every constructor):
/// - the denominator is strictly positive
/// - `gcd(|numerator|, denominator) == 1`
///
/// Because the representation is canonical, the derived `Eq` and `Hash`
/// treat mathematically equal values as identical, which the consensus
/// tally relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExactRational {
    numerator: BigInt,
    denominator: BigInt,
}

impl ExactRational {
    /// Creates a reduced fraction `numerator / denominator`
    ///
    /// # Errors
    /// Returns [`ReconstructError::DivideByZero`] if the denominator is zero
    ///
    /// # Examples
    ///
    /// ```rust
    /// use num_bigint::BigInt;
    /// use shamir_quorum::rational::ExactRational;
    ///
    /// let half = ExactRational::new(BigInt::from(-4), BigInt::from(-8)).unwrap();
    /// assert_eq!(half.to_string(), "1/2");
    ///
    /// assert!(ExactRational::new(BigInt::from(1), BigInt::from(0)).is_err());
    /// ```
    pub fn new(numerator: BigInt, denominator: BigInt) -> Result<Self, ReconstructError> {
        if denominator.is_zero() {
            return Err(ReconstructError::DivideByZero);
        }
        Ok(Self::reduced(numerator, denominator))
    }

    /// Lifts an integer into a fraction with denominator 1
    #[must_use]
    pub fn from_integer(value: BigInt) -> Self {
        Self {
            numerator: value,
            denominator: BigInt::one(),
        }
    }

    #[must_use]
    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    #[must_use]
    pub fn one() -> Self {
        Self::from_integer(BigInt::one())
    }

    // Callers guarantee a non-zero denominator.
    fn reduced(mut numerator: BigInt, mut denominator: BigInt) -> Self {
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        let divisor = numerator.gcd(&denominator);
        if !divisor.is_one() {
            numerator /= &divisor;
            denominator /= &divisor;
        }
        Self {
            numerator,
            denominator,
        }
    }

    #[must_use]
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    #[must_use]
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Returns the integer value when the fraction is whole, `None` otherwise
    ///
    /// This never rounds: `7/2` yields `None`.
    #[must_use]
    pub fn to_exact_integer(&self) -> Option<BigInt> {
        self.is_integer().then(|| self.numerator.clone())
    }

    /// Divides by `other`
    ///
    /// # Errors
    /// Returns [`ReconstructError::DivideByZero`] if `other` is zero
    pub fn checked_div(&self, other: &Self) -> Result<Self, ReconstructError> {
        if other.is_zero() {
            return Err(ReconstructError::DivideByZero);
        }
        Ok(Self::reduced(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
        ))
    }
}

impl Add for &ExactRational {
    type Output = ExactRational;

    fn add(self, other: &ExactRational) -> ExactRational {
        ExactRational::reduced(
            &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }
}

impl Sub for &ExactRational {
    type Output = ExactRational;

    fn sub(self, other: &ExactRational) -> ExactRational {
        ExactRational::reduced(
            &self.numerator * &other.denominator - &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }
}

impl Mul for &ExactRational {
    type Output = ExactRational;

    fn mul(self, other: &ExactRational) -> ExactRational {
        ExactRational::reduced(
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator,
        )
    }
}

impl Neg for &ExactRational {
    type Output = ExactRational;

    fn neg(self) -> ExactRational {
        ExactRational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

impl From<BigInt> for ExactRational {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl fmt::Display for ExactRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
