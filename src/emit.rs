//! Character emission - writes a string one character per line

use std::io::{self, Write};

/// The greeting the program spells out by default
pub const GREETING: &str = "hello";

/// Write each character of `text` followed by a newline, in order
///
/// Characters are Unicode scalar values, so a multi-byte character still
/// takes a single line.
pub fn emit_chars<W: Write>(text: &str, out: &mut W) -> io::Result<()> {
    let mut buf = [0u8; 4];
    for c in text.chars() {
        out.write_all(c.encode_utf8(&mut buf).as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Split `text` into the lines [`emit_chars`] would write, without newlines
#[must_use]
pub fn char_lines(text: &str) -> Vec<String> {
    text.chars().map(String::from).collect()
}
