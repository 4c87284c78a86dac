//! Engine backed by pdfium through `pdfium-render`.
//!
//! pdfium is a C++ library loaded at runtime. The binding is made once in the
//! constructor so a missing library is reported before any document is read,
//! and again for each conversion, since a bound `Pdfium` is tied to the
//! thread that uses it.

use super::ConversionEngine;
use crate::error::ConversionError;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const NAME: &str = "pdfium";

/// Where to load libpdfium from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PdfiumLibrary {
    /// The platform library name inside this directory.
    Dir(PathBuf),
    /// The system-wide library on the loader's search path.
    System,
}

impl PdfiumLibrary {
    fn bind(&self) -> Result<Pdfium, ConversionError> {
        let bindings = match self {
            PdfiumLibrary::Dir(dir) => {
                Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir))
            }
            PdfiumLibrary::System => Pdfium::bind_to_system_library(),
        }
        .map_err(|e| ConversionError::EngineUnavailable(format!("{:?}", e)))?;

        Ok(Pdfium::new(bindings))
    }
}

/// Converts by loading the buffer into pdfium and concatenating page text.
#[derive(Debug, Clone)]
pub struct PdfiumEngine {
    library: PdfiumLibrary,
    page_separator: String,
}

impl PdfiumEngine {
    /// Bind to `libpdfium` inside `dir`.
    pub fn from_library_dir(dir: impl AsRef<Path>) -> Result<Self, ConversionError> {
        Self::with_library(PdfiumLibrary::Dir(dir.as_ref().to_path_buf()))
    }

    /// Bind to the system-wide pdfium.
    pub fn system() -> Result<Self, ConversionError> {
        Self::with_library(PdfiumLibrary::System)
    }

    fn with_library(library: PdfiumLibrary) -> Result<Self, ConversionError> {
        library.bind()?;
        info!("pdfium bound ({:?})", library);
        Ok(Self {
            library,
            page_separator: "\n\n".to_string(),
        })
    }

    /// Replace the text inserted between pages.
    pub fn with_page_separator(mut self, sep: impl Into<String>) -> Self {
        self.page_separator = sep.into();
        self
    }

    pub fn library(&self) -> &PdfiumLibrary {
        &self.library
    }
}

impl ConversionEngine for PdfiumEngine {
    fn name(&self) -> &'static str {
        NAME
    }

    fn convert(&self, bytes: &[u8]) -> Result<String, ConversionError> {
        let pdfium = self.library.bind()?;

        let document = pdfium
            .load_pdf_from_byte_slice(bytes, None)
            .map_err(|e| ConversionError::Failed {
                engine: NAME,
                detail: format!("{:?}", e),
            })?;

        let pages = document.pages();
        debug!("pdfium loaded {} pages", pages.len());

        let mut texts = Vec::with_capacity(pages.len() as usize);
        for (idx, page) in pages.iter().enumerate() {
            let text = page.text().map_err(|e| ConversionError::Failed {
                engine: NAME,
                detail: format!("page {}: {:?}", idx + 1, e),
            })?;
            texts.push(text.all());
        }

        Ok(join_pages(&texts, &self.page_separator))
    }
}

/// Concatenate per-page text with `separator` between pages.
fn join_pages(pages: &[String], separator: &str) -> String {
    pages.join(separator)
}
