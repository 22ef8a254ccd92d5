//! Table generator that drives enumeration, resolution and output.
//!
//! Combines the code-space walk, a CodePointResolver and a TableWriter.

use std::io::Write;

use crate::config::Config;
use crate::core::code_space::{shift_jis_sequences, ByteSequence};
use crate::core::emitter::{TableEntry, TableWriter};
use crate::error::GeneratorError;
use crate::utils::encoding::CodePointResolver;

/// Counts from one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub attempted: usize,
    pub emitted: usize,
}

impl GenerationSummary {
    pub fn skipped(&self) -> usize {
        self.attempted - self.emitted
    }
}

/// Generator over a resolver acquired by the caller.
pub struct TableGenerator<'a, R: CodePointResolver> {
    resolver: R,
    config: &'a Config,
}

impl<'a, R: CodePointResolver> TableGenerator<'a, R> {
    pub fn new(resolver: R, config: &'a Config) -> Self {
        Self { resolver, config }
    }

    /// Resolve one sequence; `None` when it has no mapping.
    pub fn entry_for(&mut self, bytes: ByteSequence) -> Option<TableEntry> {
        self.resolver
            .resolve(&bytes)
            .ok()
            .map(|code_point| TableEntry { code_point, bytes })
    }

    /// Emit every resolvable Shift-JIS sequence to `out`, in code-space order.
    pub fn generate<W: Write>(&mut self, out: W) -> Result<GenerationSummary, GeneratorError> {
        self.generate_from(shift_jis_sequences(), out)
    }

    /// Same as [`generate`](Self::generate) over an arbitrary sequence source.
    pub fn generate_from<I, W>(&mut self, sequences: I, out: W) -> Result<GenerationSummary, GeneratorError>
    where
        I: IntoIterator<Item = ByteSequence>,
        W: Write,
    {
        let mut writer = TableWriter::new(out, self.config.indent);
        let mut summary = GenerationSummary::default();

        for bytes in sequences {
            summary.attempted += 1;
            if let Some(entry) = self.entry_for(bytes) {
                writer.write_entry(&entry)?;
                summary.emitted += 1;
            }
        }

        Ok(summary)
    }
}
