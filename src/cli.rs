use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Validates that the threshold is at least 1
/// A threshold of 0 selects no shares, so no subset could ever agree on a secret
fn validate_threshold(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if value == 0 {
        return Err("Threshold must be at least 1".to_string());
    }
    Ok(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `Secret: <value>` message
    Text,
    /// JSON report including the witness shares
    Json,
}

#[derive(Parser)]
#[command(name = "shamir-quorum")]
#[command(
    about = "Reconstruct a Shamir-shared secret by majority vote over every threshold-sized subset of shares"
)]
pub struct Cli {
    /// JSON share record to read; reads stdin when omitted or '-'
    pub input: Option<PathBuf>,

    /// Override the threshold declared in the record's "keys.k"
    #[arg(short, long, value_parser = validate_threshold)]
    pub threshold: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also print the witness shares and agreement count (text format)
    #[arg(short = 'w', long)]
    pub show_witness: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log directive for the requested verbosity
    #[must_use]
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Input path, or `None` for stdin
    #[must_use]
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }
}
