//! Conversion engines: the external libraries that turn PDF bytes into text.
//!
//! Engines are black boxes. This crate never inspects PDF structure itself;
//! it hands a byte slice to an engine and passes back whatever string comes
//! out. The [`ConversionEngine`] trait is the seam: the default
//! [`PdfExtractEngine`] needs no native library, while [`PdfiumEngine`] binds
//! Google's pdfium at runtime.
//!
//! Engine calls are blocking. [`crate::pipeline::handoff`] moves them onto
//! tokio's blocking pool.

mod extract;
#[cfg(test)]
mod fixtures;
mod pdfium;

pub use self::extract::PdfExtractEngine;
pub use self::pdfium::{PdfiumEngine, PdfiumLibrary};

use crate::error::ConversionError;

/// A library capable of converting a whole PDF buffer into text.
pub trait ConversionEngine: Send + Sync {
    /// Short identifier used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Convert `bytes` to text. Blocking.
    fn convert(&self, bytes: &[u8]) -> Result<String, ConversionError>;
}
