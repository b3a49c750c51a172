//! `Base` newtype for encoded share values

use crate::error::ReconstructError;

/// Numeral base of a share value (2..=36)
///
/// Digits above 9 are the letters `a`..=`z`, so 36 is the largest base
/// that has a digit alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Base(u32);

impl Base {
    /// Minimum valid base
    pub const MIN: u32 = 2;

    /// Maximum valid base
    pub const MAX: u32 = 36;

    /// Creates a new base
    ///
    /// # Errors
    /// Returns [`ReconstructError::InvalidBase`] if the value is outside 2..=36
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir_quorum::domain::Base;
    ///
    /// let hex = Base::new(16).unwrap();
    /// assert_eq!(*hex, 16);
    ///
    /// assert!(Base::new(1).is_err());
    /// assert!(Base::new(37).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self, ReconstructError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ReconstructError::InvalidBase(value));
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for Base {
    type Target = u32;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
