//! Domain types for threshold secret reconstruction
//!
//! This module contains validated types that the reconstruction core operates on:
//! - [`Base`] - Numeral base of an encoded share value (2..=36)
//! - [`Point`] - One decoded share as an `(x, y)` pair
//! - [`ShareSet`] - Shares sorted by x with no duplicate indices

mod base;
mod point;
mod share_set;

pub use base::Base;
pub use point::Point;
pub use share_set::ShareSet;
