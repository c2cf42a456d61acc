// Rust guideline compliant 2026-10-18

//! Implementation of the `bellhop show` command.

use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;

/// Shows one ticket by number.
///
/// # Errors
///
/// Returns an error if the desk cannot be opened or the ticket is not found.
pub fn execute(root: Option<&Path>, id: &str, formatter: &dyn OutputFormatter) -> Result<()> {
    let service = super::open_service(root, true)?;
    let ticket = service.show_ticket(id)?;
    println!("{}", formatter.format_ticket(&ticket));
    Ok(())
}
