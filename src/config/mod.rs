//! Run configuration.
//!
//! Built from the command line only; there is no config file.

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Spaces written before every entry.
    pub indent: usize,
    /// Label of the legacy encoding handed to the resolver.
    pub source_encoding: String,
}

fn default_encoding() -> String {
    "Shift_JIS".to_string()
}

impl Config {
    pub fn with_indent(indent: usize) -> Self {
        Self {
            indent,
            ..Default::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: 0,
            source_encoding: default_encoding(),
        }
    }
}
