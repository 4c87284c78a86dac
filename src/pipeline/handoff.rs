//! Hand the byte buffer to a conversion engine and await the result.
//!
//! ## Why spawn_blocking?
//!
//! Both engines are synchronous and CPU-bound, and pdfium keeps thread-local
//! state. `tokio::task::spawn_blocking` runs the call on the blocking pool;
//! the returned `JoinHandle` is the single deferred result the caller awaits.

use crate::engine::ConversionEngine;
use crate::error::ConversionError;
use crate::pipeline::input::{has_pdf_header, PDF_MAGIC};
use std::sync::Arc;
use tracing::debug;

/// Fail with [`ConversionError::NotAPdf`] unless `bytes` starts with `%PDF`.
pub fn check_pdf_header(bytes: &[u8]) -> Result<(), ConversionError> {
    if has_pdf_header(bytes) {
        return Ok(());
    }
    let n = bytes.len().min(PDF_MAGIC.len());
    Err(ConversionError::NotAPdf {
        magic: bytes[..n].to_vec(),
    })
}

/// Run `engine` over `bytes` on the blocking pool and wait for it to settle.
pub async fn run_engine(
    engine: Arc<dyn ConversionEngine>,
    bytes: Vec<u8>,
) -> Result<String, ConversionError> {
    let name = engine.name();
    debug!("Handing {} bytes to {}", bytes.len(), name);

    tokio::task::spawn_blocking(move || engine.convert(&bytes))
        .await
        .map_err(|e| ConversionError::Internal(format!("{name} task failed: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl ConversionEngine for Echo {
        fn name(&self) -> &'static str {
            "echo"
        }

        fn convert(&self, bytes: &[u8]) -> Result<String, ConversionError> {
            Ok(String::from_utf8_lossy(bytes).into_owned())
        }
    }

    struct Explodes;

    impl ConversionEngine for Explodes {
        fn name(&self) -> &'static str {
            "explodes"
        }

        fn convert(&self, _bytes: &[u8]) -> Result<String, ConversionError> {
            panic!("boom")
        }
    }

    #[test]
    fn header_check() {
        assert!(check_pdf_header(b"%PDF-2.0").is_ok());

        let err = check_pdf_header(b"PK\x03\x04rest").unwrap_err();
        match err {
            ConversionError::NotAPdf { magic } => assert_eq!(magic, b"PK\x03\x04"),
            other => panic!("unexpected: {other:?}"),
        }

        let err = check_pdf_header(b"%P").unwrap_err();
        assert!(matches!(err, ConversionError::NotAPdf { ref magic } if magic == b"%P"));
    }

    #[tokio::test]
    async fn engine_receives_exact_bytes() {
        let text = run_engine(Arc::new(Echo), b"%PDF hello\n".to_vec())
            .await
            .unwrap();
        assert_eq!(text, "%PDF hello\n");
    }

    #[tokio::test]
    async fn panicking_engine_becomes_internal_error() {
        let err = run_engine(Arc::new(Explodes), Vec::new()).await.unwrap_err();
        assert!(matches!(err, ConversionError::Internal(_)), "got: {err:?}");
        assert!(err.to_string().contains("explodes"));
    }
}
