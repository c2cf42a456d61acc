// Rust guideline compliant 2026-10-18

//! Command implementations for the Bellhop CLI.

pub mod call;
pub mod pending;
pub mod resolve;
pub mod serve;
pub mod show;
pub mod status;

use anyhow::Result;
use bellhop_app::{Alerter, DeskContext, SilentAlerter, TerminalBell, TicketService};
use std::path::Path;
use std::sync::Arc;

/// Opens the ticket service for a desk.
///
/// # Arguments
///
/// * `root` - Optional desk root; defaults to the current directory
/// * `silent` - Use a silent alerter instead of the terminal bell
///
/// # Errors
///
/// Returns an error if the desk configuration cannot be loaded.
pub fn open_service(root: Option<&Path>, silent: bool) -> Result<TicketService> {
    let desk = DeskContext::open(root)?;
    let alerter: Arc<dyn Alerter> = if silent {
        Arc::new(SilentAlerter)
    } else {
        Arc::new(TerminalBell::stderr())
    };
    Ok(desk.open_service(alerter)?)
}
