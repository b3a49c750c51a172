//! Error types for share decoding and secret reconstruction

use num_bigint::BigInt;
use thiserror::Error;

/// Errors raised by the reconstruction core.
///
/// Every variant aborts the current reconstruction; nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconstructError {
    /// A share value contains a character that is not a digit in its base
    #[error("Invalid digit '{character}' for base {base}")]
    InvalidDigit { character: char, base: u32 },

    /// Base outside the supported 2..=36 range
    #[error("Unsupported base {0}: must be between 2 and 36")]
    InvalidBase(u32),

    /// Zero denominator in a rational construction or division
    #[error("Division by zero")]
    DivideByZero,

    /// Fewer usable shares than the reconstruction threshold
    #[error("Insufficient shares: need at least {required}, but only {available} provided")]
    InsufficientShares { required: usize, available: usize },

    /// No subset produced a candidate secret
    #[error("Could not determine a consensus secret: no subsets were evaluated")]
    NoConsensus,

    /// Two shares claim the same x-coordinate
    #[error("Duplicate share index {0}")]
    DuplicateShareIndex(BigInt),
}
