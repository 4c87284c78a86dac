//! Conversion entry points.
//!
//! One linear sequence: read the file, hand the bytes to the configured
//! engine, await the deferred result. Nothing is retried and the returned
//! text is exactly what the engine produced.

use crate::config::ConversionConfig;
use crate::engine::ConversionEngine;
use crate::error::{ConversionError, Pdf2MdError};
use crate::pipeline::{handoff, input};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Convert the PDF at `path` to text.
///
/// # Errors
/// - [`Pdf2MdError::Read`] when the file cannot be read
/// - [`Pdf2MdError::Conversion`] when the engine rejects the document
pub async fn convert_file(
    path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<String, Pdf2MdError> {
    let start = Instant::now();
    let path = path.as_ref();
    info!("Starting conversion: {}", path.display());

    let document = input::read_document(path).await?;
    let text = convert_bytes(document.into_bytes(), config).await?;

    info!(
        "Converted {} in {}ms ({} chars)",
        path.display(),
        start.elapsed().as_millis(),
        text.len()
    );
    Ok(text)
}

/// Convert an in-memory PDF buffer with the engine named in `config`.
pub async fn convert_bytes(
    bytes: Vec<u8>,
    config: &ConversionConfig,
) -> Result<String, ConversionError> {
    if config.require_pdf_header {
        handoff::check_pdf_header(&bytes)?;
    }
    let engine = config.build_engine()?;
    convert_with(engine, bytes).await
}

/// Convert an in-memory PDF buffer with a caller-supplied engine.
///
/// No header check is made; the engine decides what it accepts.
pub async fn convert_with(
    engine: Arc<dyn ConversionEngine>,
    bytes: Vec<u8>,
) -> Result<String, ConversionError> {
    let name = engine.name();
    let text = handoff::run_engine(engine, bytes).await?;

    if !has_word_chars(&text) {
        warn!("{name}: document produced no text; it may be a scanned image");
    }
    Ok(text)
}

fn has_word_chars(text: &str) -> bool {
    text.chars().any(|c| c.is_alphanumeric() || c == '_')
}
