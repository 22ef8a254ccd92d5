//! Shift-JIS code-space enumeration.
//!
//! Produces every candidate byte sequence of the legacy code space in a fixed
//! order: all single bytes first, then lead/trail pairs in ascending order.

use std::fmt;
use std::iter::FusedIterator;

/// Half-open byte range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u8,
    pub end: u8,
}

impl ByteRange {
    pub const fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, byte: u8) -> bool {
        self.start <= byte && byte < self.end
    }
}

/// One candidate code unit: a single byte or a lead/trail pair.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByteSequence {
    bytes: [u8; 2],
    len: u8,
}

impl ByteSequence {
    pub const fn single(byte: u8) -> Self {
        Self { bytes: [byte, 0], len: 1 }
    }

    pub const fn double(lead: u8, trail: u8) -> Self {
        Self { bytes: [lead, trail], len: 2 }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }
}

impl fmt::Debug for ByteSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteSequence(")?;
        for (i, b) in self.as_bytes().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02X}", b)?;
        }
        write!(f, ")")
    }
}

/// A block of the code space and the gaps it leaves out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeSpaceRule {
    /// Single bytes in `range`, skipping `gap`.
    SingleByte { range: ByteRange, gap: ByteRange },
    /// Lead bytes in `lead` (minus `lead_gap`), each paired with every
    /// trail byte in `trail` except `trail_gap`.
    DoubleByte {
        lead: ByteRange,
        lead_gap: ByteRange,
        trail: ByteRange,
        trail_gap: u8,
    },
}

/// The historical Shift-JIS layout. These bounds must not be widened or
/// narrowed; downstream tables depend on them bit for bit.
pub const SHIFT_JIS_RULES: [CodeSpaceRule; 2] = [
    // Printable ASCII and half-width katakana, without the C1 / undefined area.
    CodeSpaceRule::SingleByte {
        range: ByteRange::new(0x20, 0xE0),
        gap: ByteRange::new(0x7F, 0xA1),
    },
    // Lead bytes 0x81..=0x9F and 0xE0..=0xEE.
    CodeSpaceRule::DoubleByte {
        lead: ByteRange::new(0x81, 0xEF),
        lead_gap: ByteRange::new(0xA0, 0xE0),
        trail: ByteRange::new(0x40, 0xFD),
        trail_gap: 0x7F,
    },
];

impl CodeSpaceRule {
    fn origin(&self) -> Cursor {
        match *self {
            CodeSpaceRule::SingleByte { range, .. } => Cursor {
                lead: u16::from(range.start),
                trail: 0,
            },
            CodeSpaceRule::DoubleByte { lead, trail, .. } => Cursor {
                lead: u16::from(lead.start),
                trail: u16::from(trail.start),
            },
        }
    }

    fn advance(&self, cursor: &mut Cursor) -> Option<ByteSequence> {
        match *self {
            CodeSpaceRule::SingleByte { range, gap } => {
                while cursor.lead < u16::from(range.end) {
                    let b = cursor.lead as u8;
                    cursor.lead += 1;
                    if !gap.contains(b) {
                        return Some(ByteSequence::single(b));
                    }
                }
                None
            }
            CodeSpaceRule::DoubleByte {
                lead,
                lead_gap,
                trail,
                trail_gap,
            } => {
                while cursor.lead < u16::from(lead.end) {
                    let l = cursor.lead as u8;
                    if !lead_gap.contains(l) {
                        while cursor.trail < u16::from(trail.end) {
                            let t = cursor.trail as u8;
                            cursor.trail += 1;
                            if t != trail_gap {
                                return Some(ByteSequence::double(l, t));
                            }
                        }
                    }
                    cursor.lead += 1;
                    cursor.trail = u16::from(trail.start);
                }
                None
            }
        }
    }
}

// u16 so stepping past 0xFF cannot wrap.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    lead: u16,
    trail: u16,
}

/// Lazy walk over a list of rules, in rule order.
#[derive(Debug, Clone)]
pub struct ByteSequences<'a> {
    rules: &'a [CodeSpaceRule],
    index: usize,
    cursor: Option<Cursor>,
}

impl<'a> ByteSequences<'a> {
    pub fn new(rules: &'a [CodeSpaceRule]) -> Self {
        Self {
            rules,
            index: 0,
            cursor: None,
        }
    }
}

impl Iterator for ByteSequences<'_> {
    type Item = ByteSequence;

    fn next(&mut self) -> Option<ByteSequence> {
        let rules = self.rules;
        loop {
            let rule = rules.get(self.index)?;
            let cursor = self.cursor.get_or_insert_with(|| rule.origin());
            if let Some(seq) = rule.advance(cursor) {
                return Some(seq);
            }
            self.index += 1;
            self.cursor = None;
        }
    }
}

impl FusedIterator for ByteSequences<'_> {}

/// Every candidate sequence of the Shift-JIS code space.
pub fn shift_jis_sequences() -> ByteSequences<'static> {
    ByteSequences::new(&SHIFT_JIS_RULES)
}
