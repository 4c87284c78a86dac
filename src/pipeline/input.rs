//! Input reading: load the user-supplied path into memory.
//!
//! The whole file is read in one go. Both engines take a byte slice, and
//! holding the buffer means the bytes converted are exactly the bytes that
//! were on disk when the read finished, even if the file changes afterwards.

use crate::error::FileReadError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Leading bytes of every PDF file.
pub const PDF_MAGIC: &[u8; 4] = b"%PDF";

/// A document loaded from disk, alive for one conversion.
#[derive(Debug, Clone)]
pub struct InputDocument {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl InputDocument {
    pub fn new(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            bytes,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether the buffer starts with `%PDF`.
    pub fn has_pdf_header(&self) -> bool {
        has_pdf_header(&self.bytes)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Whether `bytes` starts with the PDF magic.
pub fn has_pdf_header(bytes: &[u8]) -> bool {
    bytes.starts_with(PDF_MAGIC)
}

/// Read the file at `path` into an [`InputDocument`].
pub async fn read_document(path: impl AsRef<Path>) -> Result<InputDocument, FileReadError> {
    let path = path.as_ref().to_path_buf();

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| FileReadError::from_io(path.clone(), e))?;

    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(InputDocument { path, bytes })
}
