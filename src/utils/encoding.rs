//! Code-point resolution for legacy byte sequences.
//!
//! Uses encoding_rs crate instead of the system iconv for portability.

use std::fmt;

use encoding_rs::{DecoderResult, Encoding};

use crate::core::code_space::ByteSequence;
use crate::error::{GeneratorError, ResolveError};

/// A resolved Unicode scalar value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodePoint(pub u32);

impl CodePoint {
    /// Low 16 bits, the part written into the table key.
    pub fn low_u16(self) -> u16 {
        (self.0 & 0xFFFF) as u16
    }
}

impl fmt::Debug for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}

/// Turns one byte sequence into one Unicode scalar value.
pub trait CodePointResolver {
    fn resolve(&mut self, seq: &ByteSequence) -> Result<CodePoint, ResolveError>;
}

/// Resolver backed by an encoding_rs decoder for a fixed source encoding.
///
/// Acquired once per run with [`EncodingResolver::open`] and released on drop.
#[derive(Debug)]
pub struct EncodingResolver {
    encoding: &'static Encoding,
}

impl EncodingResolver {
    /// Look up the source encoding by label ("Shift_JIS", "sjis", ...).
    pub fn open(label: &str) -> Result<Self, GeneratorError> {
        let encoding = Encoding::for_label(label.as_bytes()).ok_or_else(|| {
            GeneratorError::UnsupportedEncoding {
                label: label.to_string(),
            }
        })?;
        log::debug!("opened resolver for {} (label '{}')", encoding.name(), label);
        Ok(Self { encoding })
    }
}

impl CodePointResolver for EncodingResolver {
    fn resolve(&mut self, seq: &ByteSequence) -> Result<CodePoint, ResolveError> {
        let input = seq.as_bytes();
        // Fresh decoder per call so no state leaks between sequences.
        let mut decoder = self.encoding.new_decoder_without_bom_handling();
        let mut dest = [0u8; 16];
        let (result, read, written) =
            decoder.decode_to_utf8_without_replacement(input, &mut dest, true);

        match result {
            DecoderResult::Malformed(_, _) => return Err(ResolveError::Malformed),
            DecoderResult::OutputFull => return Err(ResolveError::Incomplete),
            DecoderResult::InputEmpty => {}
        }
        if read != input.len() {
            return Err(ResolveError::Incomplete);
        }

        let text = std::str::from_utf8(&dest[..written]).map_err(|_| ResolveError::Malformed)?;
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(CodePoint(u32::from(c))),
            _ => Err(ResolveError::NotSingleScalar {
                count: text.chars().count(),
            }),
        }
    }
}

impl Drop for EncodingResolver {
    fn drop(&mut self) {
        log::debug!("released resolver for {}", self.encoding.name());
    }
}
