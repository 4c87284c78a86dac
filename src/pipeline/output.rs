//! Writing converted text to a sink.

use std::io::{self, Write};

/// Write `text` verbatim followed by one newline, then flush.
///
/// A newline is appended even when `text` already ends with one; the
/// converted text itself is never altered.
pub fn write_text<W: Write>(mut w: W, text: &str) -> io::Result<()> {
    w.write_all(text.as_bytes())?;
    w.write_all(b"\n")?;
    w.flush()
}
