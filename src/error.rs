//! Error types for the pdf2md library.
//!
//! Two kinds of failure exist, and they are kept in separate enums:
//!
//! * [`FileReadError`]: the input path could not be read into memory
//!   (missing file, permission denied, a directory, other I/O failure).
//!
//! * [`ConversionError`]: the bytes were read but the conversion library
//!   refused them (not a PDF, malformed document, library panic, pdfium not
//!   loadable).
//!
//! [`Pdf2MdError`] wraps both for the top-level entry points. Neither kind is
//! retried; callers report and stop.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the top-level `convert_*` functions.
#[derive(Debug, Error)]
pub enum Pdf2MdError {
    /// The input file could not be read.
    #[error(transparent)]
    Read(#[from] FileReadError),

    /// The conversion library failed on the document.
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Pdf2MdError {
    pub fn is_read_error(&self) -> bool {
        matches!(self, Pdf2MdError::Read(_))
    }

    pub fn is_conversion_error(&self) -> bool {
        matches!(self, Pdf2MdError::Conversion(_))
    }
}

/// The input path could not be loaded into a byte buffer.
#[derive(Debug, Error)]
pub enum FileReadError {
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    NotFound { path: PathBuf },

    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    #[error("'{path}' is a directory, not a PDF file")]
    IsDirectory { path: PathBuf },

    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FileReadError {
    /// Classify an I/O error raised while reading `path`.
    pub fn from_io(path: PathBuf, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FileReadError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => FileReadError::PermissionDenied { path },
            _ if path.is_dir() => FileReadError::IsDirectory { path },
            _ => FileReadError::Io { path, source: err },
        }
    }

    /// The path that failed to read.
    pub fn path(&self) -> &std::path::Path {
        match self {
            FileReadError::NotFound { path }
            | FileReadError::PermissionDenied { path }
            | FileReadError::IsDirectory { path }
            | FileReadError::Io { path, .. } => path,
        }
    }
}

/// The conversion library could not turn the bytes into text.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The buffer does not start with the `%PDF` header.
    #[error("Input is not a valid PDF (first bytes: {magic:?})")]
    NotAPdf { magic: Vec<u8> },

    /// The engine returned an error for this document.
    #[error("Conversion failed ({engine}): {detail}")]
    Failed { engine: &'static str, detail: String },

    /// The engine panicked while parsing, usually on a malformed PDF.
    #[error("Conversion failed ({engine}): the PDF parser aborted on malformed input")]
    EnginePanicked { engine: &'static str },

    /// The engine's backing library could not be loaded.
    #[error(
        "Failed to bind to pdfium library: {0}\n\
Point the pdfium engine at a directory containing libpdfium, or install it system-wide."
    )]
    EngineUnavailable(String),

    /// The blocking conversion task did not complete.
    #[error("Internal error: {0}")]
    Internal(String),
}
