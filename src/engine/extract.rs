//! Engine backed by the pure-Rust `pdf-extract` crate.

use super::ConversionEngine;
use crate::error::ConversionError;
use gag::Gag;
use std::panic;
use tracing::{debug, warn};

const NAME: &str = "pdf-extract";

/// Converts with [`pdf_extract::extract_text_from_mem`].
///
/// `pdf-extract` panics on some malformed documents instead of returning an
/// error; those panics are caught and reported as
/// [`ConversionError::EnginePanicked`].
#[derive(Debug, Clone)]
pub struct PdfExtractEngine {
    silence_stdout: bool,
}

impl PdfExtractEngine {
    /// `silence_stdout` gags the process's stdout while the library runs.
    ///
    /// The gag redirects file descriptor 1 for the whole process, so output
    /// from other threads during the conversion is discarded too.
    pub fn new(silence_stdout: bool) -> Self {
        Self { silence_stdout }
    }
}

impl Default for PdfExtractEngine {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ConversionEngine for PdfExtractEngine {
    fn name(&self) -> &'static str {
        NAME
    }

    fn convert(&self, bytes: &[u8]) -> Result<String, ConversionError> {
        // Only one gag may exist per stream; if another thread holds it the
        // conversion runs ungagged.
        let _gag = if self.silence_stdout {
            match Gag::stdout() {
                Ok(gag) => Some(gag),
                Err(e) => {
                    debug!("{NAME}: stdout not silenced: {e}");
                    None
                }
            }
        } else {
            None
        };

        let result = panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes));

        match result {
            Ok(Ok(text)) => {
                debug!("{NAME} produced {} chars", text.len());
                Ok(text)
            }
            Ok(Err(e)) => Err(ConversionError::Failed {
                engine: NAME,
                detail: e.to_string(),
            }),
            Err(_) => {
                warn!("{NAME} panicked while parsing the document");
                Err(ConversionError::EnginePanicked { engine: NAME })
            }
        }
    }
}
