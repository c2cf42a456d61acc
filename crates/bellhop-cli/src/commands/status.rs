// Rust guideline compliant 2026-10-18

//! Implementation of the `bellhop status` command.

use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;

/// Prints the pending count and the most recent pending ticket numbers.
///
/// # Errors
///
/// Returns an error if the desk configuration cannot be loaded.
pub fn execute(root: Option<&Path>, formatter: &dyn OutputFormatter) -> Result<()> {
    let service = super::open_service(root, true)?;
    println!("{}", formatter.format_summary(&service.list_pending()));
    Ok(())
}
