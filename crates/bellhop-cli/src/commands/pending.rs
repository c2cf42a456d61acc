// Rust guideline compliant 2026-10-18

//! Implementation of the `bellhop pending` command.
//!
//! Lists every pending staff call, oldest first.

use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;

/// Prints all pending tickets.
///
/// # Errors
///
/// Returns an error if the desk configuration cannot be loaded.
pub fn execute(root: Option<&Path>, formatter: &dyn OutputFormatter) -> Result<()> {
    let service = super::open_service(root, true)?;
    println!("{}", formatter.format_list(&service.pending_tickets()));
    Ok(())
}
