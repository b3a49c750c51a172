//! Base-N digit strings for share values
//!
//! Share values arrive as digit strings in an arbitrary base between 2 and 36.
//! Digits `0`-`9` have their usual value and the letters `a`-`z` (either case)
//! stand for 10-35. Underscores may be used to group digits and are ignored.
//!
//! # Examples
//!
//! ```rust
//! use num_bigint::BigInt;
//! use shamir_quorum::codec::{decode_digits, encode_digits};
//! use shamir_quorum::domain::Base;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let hex = Base::new(16)?;
//! assert_eq!(decode_digits("FF", hex)?, BigInt::from(255));
//! assert_eq!(decode_digits("dead_beef", hex)?, BigInt::from(0xdead_beef_u32));
//!
//! let binary = Base::new(2)?;
//! assert_eq!(encode_digits(&BigInt::from(10), binary), "1010");
//!
//! // '2' is not a binary digit
//! assert!(decode_digits("102", binary).is_err());
//! # Ok(())
//! # }
//! ```

use num_bigint::BigInt;
use num_traits::Zero;

use crate::domain::Base;
use crate::error::ReconstructError;

/// Separator allowed between digit groups
pub const DIGIT_SEPARATOR: char = '_';

/// Maps a character to its digit value, case-insensitively
///
/// Returns `None` for anything that is not an ASCII letter or digit.
fn digit_value(character: char) -> Option<u32> {
    character.to_digit(Base::MAX)
}

/// Decodes a digit string into a non-negative integer
///
/// Digits are accumulated most significant first. An input that is empty
/// after removing separators decodes to zero.
///
/// # Errors
/// Returns [`ReconstructError::InvalidDigit`] if a character is not
/// alphanumeric or its value is not below the base
pub fn decode_digits(digits: &str, base: Base) -> Result<BigInt, ReconstructError> {
    let radix = *base;
    let mut result = BigInt::zero();

    for character in digits.chars().filter(|&c| c != DIGIT_SEPARATOR) {
        let digit = digit_value(character)
            .filter(|&d| d < radix)
            .ok_or(ReconstructError::InvalidDigit {
                character,
                base: radix,
            })?;
        result = result * radix + digit;
    }

    Ok(result)
}

/// Encodes an integer as lowercase digits in the given base
///
/// Negative values get a leading `-`; [`decode_digits`] does not accept it,
/// since share values are always non-negative.
#[must_use]
pub fn encode_digits(value: &BigInt, base: Base) -> String {
    value.to_str_radix(*base)
}
