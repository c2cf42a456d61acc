// Rust guideline compliant 2026-10-18

//! Implementation of the `bellhop resolve` command.

use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;

/// Marks a ticket resolved and prints the outcome.
///
/// # Returns
///
/// Whether the ticket was resolved by this call. Unknown and already resolved
/// tickets are reported, not raised.
///
/// # Errors
///
/// Returns an error if:
/// - The desk configuration cannot be loaded
/// - The ticket log cannot be written
pub fn execute(root: Option<&Path>, id: &str, formatter: &dyn OutputFormatter) -> Result<bool> {
    let service = super::open_service(root, true)?;
    let outcome = service.resolve_ticket(id)?;
    println!("{}", formatter.format_outcome(&outcome));
    Ok(outcome.success)
}
