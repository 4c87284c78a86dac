//! Configuration types for PDF conversion.
//!
//! Every library-level knob lives in [`ConversionConfig`], built via its
//! [`ConversionConfigBuilder`]. The `pdf2md` binary never changes these; it
//! always converts with [`ConversionConfig::default()`].

use crate::engine::{ConversionEngine, PdfExtractEngine, PdfiumEngine};
use crate::error::{ConversionError, Pdf2MdError};
use std::path::PathBuf;
use std::sync::Arc;

/// Configuration for a single conversion.
///
/// # Example
/// ```rust
/// use pdf2md::{ConversionConfig, EngineChoice};
///
/// let config = ConversionConfig::builder()
///     .engine(EngineChoice::PdfExtract)
///     .require_pdf_header(false)
///     .build()
///     .unwrap();
/// assert!(!config.require_pdf_header);
/// ```
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Which external library turns the bytes into text. Default: pdf-extract.
    pub engine: EngineChoice,

    /// Reject buffers that do not start with `%PDF` before calling the
    /// engine. Default: true.
    ///
    /// Gives a readable "not a PDF" error instead of whatever the engine
    /// makes of a ZIP or a text file.
    pub require_pdf_header: bool,

    /// Suppress anything the engine prints to stdout while it runs. Default: true.
    ///
    /// This redirects the process-wide stdout (file descriptor 1) for the
    /// duration of the call: anything another thread prints meanwhile is
    /// lost. Only one redirect can exist at a time, so of two overlapping
    /// conversions the second runs unsilenced (logged at `debug`).
    pub silence_engine_stdout: bool,

    /// Text inserted between pages by engines that extract page by page.
    /// Default: `"\n\n"`.
    pub page_separator: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            engine: EngineChoice::default(),
            require_pdf_header: true,
            silence_engine_stdout: true,
            page_separator: "\n\n".to_string(),
        }
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }

    /// Instantiate the configured engine.
    ///
    /// For pdfium this binds the shared library, which is where a missing
    /// libpdfium surfaces as [`ConversionError::EngineUnavailable`].
    pub fn build_engine(&self) -> Result<Arc<dyn ConversionEngine>, ConversionError> {
        match &self.engine {
            EngineChoice::PdfExtract => Ok(Arc::new(PdfExtractEngine::new(
                self.silence_engine_stdout,
            ))),
            EngineChoice::Pdfium { library_dir } => {
                let engine = match library_dir {
                    Some(dir) => PdfiumEngine::from_library_dir(dir)?,
                    None => PdfiumEngine::system()?,
                };
                Ok(Arc::new(engine.with_page_separator(&self.page_separator)))
            }
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn engine(mut self, engine: EngineChoice) -> Self {
        self.config.engine = engine;
        self
    }

    pub fn require_pdf_header(mut self, v: bool) -> Self {
        self.config.require_pdf_header = v;
        self
    }

    pub fn silence_engine_stdout(mut self, v: bool) -> Self {
        self.config.silence_engine_stdout = v;
        self
    }

    pub fn page_separator(mut self, sep: impl Into<String>) -> Self {
        self.config.page_separator = sep.into();
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Pdf2MdError> {
        if let EngineChoice::Pdfium {
            library_dir: Some(dir),
        } = &self.config.engine
        {
            if !dir.is_dir() {
                return Err(Pdf2MdError::InvalidConfig(format!(
                    "pdfium library directory does not exist: {}",
                    dir.display()
                )));
            }
        }
        Ok(self.config)
    }
}

/// The external library used for conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EngineChoice {
    /// Pure-Rust `pdf-extract`. (default)
    #[default]
    PdfExtract,
    /// Google's pdfium through `pdfium-render`.
    ///
    /// `library_dir` names the directory holding `libpdfium`; `None` loads
    /// the system-wide library.
    Pdfium { library_dir: Option<PathBuf> },
}
