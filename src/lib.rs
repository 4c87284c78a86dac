//! # pdf2md
//!
//! Convert a PDF document to text by handing its bytes to a PDF extraction
//! library.
//!
//! This crate does no PDF parsing of its own. It reads a file into memory,
//! passes the buffer to a [`ConversionEngine`], waits for the result and
//! returns the text unchanged. The engine is a black box: `pdf-extract` by
//! default, or pdfium via [`EngineChoice::Pdfium`].
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF path
//!  │
//!  ├─ 1. Input    read the whole file into a byte buffer
//!  ├─ 2. Handoff  %PDF header check, engine call on spawn_blocking
//!  └─ 3. Output   text written verbatim + trailing newline
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2md::{convert_file, ConversionConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let text = convert_file("document.pdf", &ConversionConfig::default()).await?;
//!     println!("{text}");
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2md` binary (clap + anyhow + tracing-subscriber) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod engine;
pub mod error;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, EngineChoice};
pub use convert::{convert_bytes, convert_file, convert_with};
pub use engine::{ConversionEngine, PdfExtractEngine, PdfiumEngine, PdfiumLibrary};
pub use error::{ConversionError, FileReadError, Pdf2MdError};
pub use pipeline::input::{read_document, InputDocument};
pub use pipeline::output::write_text;
