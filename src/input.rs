//! JSON share records
//!
//! A share record is a JSON object with a `keys` entry holding the declared
//! share count `n` and threshold `k`, plus one entry per share keyed by its
//! x-coordinate:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "10", "value": "12" },
//!     "6": { "base": "4", "value": "213" }
//! }
//! ```
//!
//! Entries whose key is neither `keys` nor an unsigned decimal integer are ignored.

use anyhow::{Context, Result};
use num_bigint::BigInt;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::codec;
use crate::domain::{Base, Point, ShareSet};

/// Name of the entry holding `n` and `k`
pub const KEYS_FIELD: &str = "keys";

/// Declared share count and threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Keys {
    pub n: usize,
    pub k: usize,
}

/// Base as given in the record: the format uses strings, plain numbers are accepted too
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BaseField {
    Number(u32),
    Text(String),
}

impl BaseField {
    fn parse(&self) -> Result<Base> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s
                .trim()
                .parse()
                .with_context(|| format!("'{s}' is not a valid base"))?,
        };
        Ok(Base::new(value)?)
    }
}

#[derive(Debug, Deserialize)]
struct ShareEntry {
    base: BaseField,
    value: String,
}

/// A parsed share record
#[derive(Debug, Clone)]
pub struct ShareRecord {
    pub keys: Keys,
    pub shares: ShareSet,
}

fn is_share_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a share record from JSON text
///
/// # Errors
/// Returns an error if the text is not a JSON object, `keys` is missing or
/// malformed, a share entry is malformed, a value does not decode in its
/// base, or two entries have the same x-coordinate
///
/// # Examples
///
/// ```rust
/// use shamir_quorum::input::parse_share_record;
///
/// let record = parse_share_record(r#"{
///     "keys": { "n": 2, "k": 2 },
///     "1": { "base": "16", "value": "ff" },
///     "2": { "base": "2", "value": "1010" }
/// }"#).unwrap();
///
/// assert_eq!(record.keys.k, 2);
/// assert_eq!(record.shares.len(), 2);
/// ```
pub fn parse_share_record(raw: &str) -> Result<ShareRecord> {
    let object: Map<String, Value> =
        serde_json::from_str(raw).context("Share record is not a valid JSON object")?;

    let keys_value = object
        .get(KEYS_FIELD)
        .with_context(|| format!("Share record has no '{KEYS_FIELD}' entry"))?;
    let keys = Keys::deserialize(keys_value)
        .with_context(|| format!("Invalid '{KEYS_FIELD}' entry: expected integer 'n' and 'k'"))?;

    let mut points = Vec::new();
    for (key, value) in &object {
        if key == KEYS_FIELD {
            continue;
        }
        if !is_share_key(key) {
            debug!(key = %key, "Ignoring non-share entry");
            continue;
        }
        points.push(parse_share(key, value).with_context(|| format!("Invalid share '{key}'"))?);
    }

    if points.len() != keys.n {
        warn!(
            declared = keys.n,
            found = points.len(),
            "Declared share count does not match the shares present"
        );
    }

    let shares = ShareSet::new(points).context("Invalid share set")?;
    Ok(ShareRecord { keys, shares })
}

fn parse_share(key: &str, value: &Value) -> Result<Point> {
    let x: BigInt = key.parse().context("Share index is not an integer")?;
    let entry = ShareEntry::deserialize(value)
        .context("Expected an object with 'base' and 'value' strings")?;
    let base = entry.base.parse()?;
    let y = codec::decode_digits(&entry.value, base)?;
    Ok(Point { x, y })
}
