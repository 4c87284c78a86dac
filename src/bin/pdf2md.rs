//! CLI binary for pdf2md.
//!
//! Reads one PDF path, converts it with the default engine and prints the
//! text to stdout. Errors go to stderr with a non-zero exit status.

use anyhow::{Context, Result};
use clap::Parser;
use pdf2md::{convert_file, write_text, ConversionConfig};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Print the text content of a PDF file.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2md",
    version,
    about = "Print the text content of a PDF file",
    long_about = "Reads a PDF file, converts it to text with an embedded PDF extraction \
library and prints the result to stdout. Set RUST_LOG=info for diagnostics on stderr.",
    color = clap::ColorChoice::Auto
)]
struct Cli {
    /// Path to the PDF file.
    input: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // stdout carries only the converted text; diagnostics go to stderr and
    // stay quiet unless RUST_LOG asks for more.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // ── Run conversion ───────────────────────────────────────────────────
    let text = convert_file(&cli.input, &ConversionConfig::default())
        .await
        .with_context(|| format!("Failed to convert '{}'", cli.input.display()))?;

    write_text(io::stdout().lock(), &text).context("Failed to write to stdout")?;

    Ok(())
}
