// Rust guideline compliant 2026-10-18

//! Bellhop CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod output;

pub use output::{create_formatter, OutputFormatter};
