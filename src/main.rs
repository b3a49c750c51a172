use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

use shamir_quorum::cli::{Cli, OutputFormat};
use shamir_quorum::commands::{reconstruct_secret, render_json, render_text};

/// Read the share record from a file
fn read_file(path: &Path) -> Result<Zeroizing<String>> {
    fs::read_to_string(path)
        .map(Zeroizing::new)
        .with_context(|| format!("Failed to read share record from {}", path.display()))
}

/// Read the share record from stdin (prompting when a TTY is attached)
fn read_stdin() -> Result<Zeroizing<String>> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Paste the JSON share record, then press Ctrl-D:");
    }

    let mut raw = Zeroizing::new(String::new());
    io::stdin()
        .lock()
        .read_to_string(&mut raw)
        .context("Failed to read share record from stdin")?;
    Ok(raw)
}

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let raw = match cli.input_path() {
        Some(path) => read_file(path)?,
        None => read_stdin()?,
    };

    let result = reconstruct_secret(&raw, cli.threshold)?;

    match cli.format {
        OutputFormat::Text => println!("{}", render_text(&result, cli.show_witness)),
        OutputFormat::Json => println!("{}", render_json(&result)?),
    }

    Ok(())
}
