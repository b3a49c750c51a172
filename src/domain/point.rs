//! `Point` type: one decoded share

use num_bigint::BigInt;

/// A decoded share: `x` is the share index, `y` the share value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    #[must_use]
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}
