//! Core generation logic: code-space walk, entry formatting, and the driver.

pub mod code_space;
pub mod emitter;
pub mod table_generator;
