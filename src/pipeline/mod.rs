//! Pipeline stages for PDF-to-text conversion.
//!
//! ```text
//! input ──▶ handoff ──▶ output
//! (bytes)   (engine)    (stdout)
//! ```
//!
//! 1. [`input`]   read the user-supplied path into an in-memory buffer
//! 2. [`handoff`] check the `%PDF` header and run the engine on the
//!    blocking pool
//! 3. [`output`]  write the returned text unchanged, plus a newline

pub mod handoff;
pub mod input;
pub mod output;
