use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::consensus::{self, ReconstructionResult};
use crate::input;

/// Reconstruct the secret from a JSON share record
///
/// `threshold` overrides the record's declared `k` when given.
///
/// # Errors
/// Returns an error if the record cannot be parsed or reconstruction fails
pub fn reconstruct_secret(raw: &str, threshold: Option<usize>) -> Result<ReconstructionResult> {
    let record = input::parse_share_record(raw).context("Failed to parse share record")?;

    let threshold = threshold.unwrap_or(record.keys.k);
    if threshold != record.keys.k {
        info!(
            declared = record.keys.k,
            threshold, "Overriding declared threshold"
        );
    }

    consensus::reconstruct(&record.shares, threshold).context("Failed to reconstruct secret")
}

/// Witness share with decimal coordinates
#[derive(Debug, Serialize)]
pub struct WitnessShare {
    pub x: String,
    pub y: String,
}

/// Serializable summary of a reconstruction
///
/// Big integers are rendered as decimal strings so no JSON consumer loses precision.
#[derive(Debug, Serialize)]
pub struct SecretReport {
    /// The secret as written by [`render_text`]: an integer or `n/d`
    pub secret: String,
    pub numerator: String,
    pub denominator: String,
    pub is_integer: bool,
    pub agreeing_subsets: usize,
    pub total_subsets: usize,
    pub witness: Vec<WitnessShare>,
}

impl From<&ReconstructionResult> for SecretReport {
    fn from(result: &ReconstructionResult) -> Self {
        Self {
            secret: result.value.to_string(),
            numerator: result.value.numerator().to_string(),
            denominator: result.value.denominator().to_string(),
            is_integer: result.is_integer(),
            agreeing_subsets: result.agreeing_subsets,
            total_subsets: result.total_subsets,
            witness: result
                .witness
                .iter()
                .map(|p| WitnessShare {
                    x: p.x.to_string(),
                    y: p.y.to_string(),
                })
                .collect(),
        }
    }
}

/// Human-readable result
///
/// Whole secrets print as `Secret: <n>`, anything else as
/// `Secret (rational): <num>/<den>`.
#[must_use]
pub fn render_text(result: &ReconstructionResult, show_witness: bool) -> String {
    let mut out = match result.integer_value() {
        Some(secret) => format!("Secret: {secret}"),
        None => format!("Secret (rational): {}", result.value),
    };

    if show_witness {
        out.push_str(&format!(
            "\nAgreeing subsets: {}/{}",
            result.agreeing_subsets, result.total_subsets
        ));
        out.push_str("\nWitness shares:");
        for point in &result.witness {
            out.push_str(&format!("\n  x={} y={}", point.x, point.y));
        }
    }

    out
}

/// Pretty-printed JSON result
///
/// # Errors
/// Returns an error if serialization fails
pub fn render_json(result: &ReconstructionResult) -> Result<String> {
    serde_json::to_string_pretty(&SecretReport::from(result))
        .context("Failed to serialize reconstruction report")
}
