//! Table entry formatting.
//!
//! Each entry is one line of a JSON object body, e.g. `"\u3042": [130,160],`.
//! No surrounding braces are written; callers wrap the fragment themselves.

use std::fmt;
use std::io::{self, Write};

use crate::core::code_space::ByteSequence;
use crate::utils::encoding::CodePoint;

/// A resolved code point and the bytes it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    pub code_point: CodePoint,
    pub bytes: ByteSequence,
}

impl fmt::Display for TableEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"\\u{:04x}\": [", self.code_point.low_u16())?;
        for (i, b) in self.bytes.as_bytes().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", b)?;
        }
        f.write_str("]")
    }
}

const SPACES: [u8; 64] = [b' '; 64];

/// Writes indented, comma-terminated entries to an output stream.
pub struct TableWriter<W: Write> {
    out: W,
    indent: usize,
}

impl<W: Write> TableWriter<W> {
    pub fn new(out: W, indent: usize) -> Self {
        Self { out, indent }
    }

    pub fn write_entry(&mut self, entry: &TableEntry) -> io::Result<()> {
        self.write_indent()?;
        writeln!(self.out, "{},", entry)
    }

    // Streamed in chunks; the width comes from the command line.
    fn write_indent(&mut self) -> io::Result<()> {
        let mut remaining = self.indent;
        while remaining > 0 {
            let n = remaining.min(SPACES.len());
            self.out.write_all(&SPACES[..n])?;
            remaining -= n;
        }
        Ok(())
    }
}
