// Rust guideline compliant 2026-10-18

//! Implementation of the `bellhop call` command.
//!
//! Files a staff call from the terminal, the same way the `call_staff` tool
//! does, except that the location can be overridden.

use crate::OutputFormatter;
use anyhow::Result;
use bellhop_app::TicketRequest;
use std::path::Path;

/// Files a staff call and prints the confirmation.
///
/// # Errors
///
/// Returns an error if:
/// - The desk configuration cannot be loaded
/// - The reason is blank
/// - The ticket log cannot be written
pub fn execute(
    root: Option<&Path>,
    silent: bool,
    request: TicketRequest,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let service = super::open_service(root, silent)?;
    let filed = service.file_ticket(request)?;
    println!("{}", formatter.format_filed(&filed));
    Ok(())
}
