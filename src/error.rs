//! Error types for table generation.

use std::io;
use thiserror::Error;

/// Errors that stop a generation run.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The transcoding backend does not know the requested source encoding.
    #[error("cannot convert from '{label}' to UCS-4: unsupported encoding")]
    UnsupportedEncoding { label: String },

    #[error("failed to write table entry: {0}")]
    Output(#[from] io::Error),
}

/// Why a single byte sequence did not resolve to a code point.
///
/// These never leave the generator; the entry is simply not emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("byte sequence is not mapped in the source encoding")]
    Malformed,

    #[error("byte sequence ends in the middle of a character")]
    Incomplete,

    #[error("byte sequence decoded to {count} scalar values, expected exactly one")]
    NotSingleScalar { count: usize },
}
