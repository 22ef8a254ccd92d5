//! Utility modules for transcoding.

pub mod encoding;
