// Rust guideline compliant 2026-10-18

//! Implementation of the `bellhop serve` command.
//!
//! Runs the MCP server on stdio until the host closes the connection.

use anyhow::Result;
use bellhop_mcp::McpOptions;
use std::path::PathBuf;

/// Starts the MCP server.
///
/// # Errors
///
/// Returns an error if the server cannot start or exits abnormally.
pub fn execute(
    root: Option<PathBuf>,
    silent: bool,
    log_level: String,
    log_file: Option<PathBuf>,
) -> Result<()> {
    bellhop_mcp::run(McpOptions {
        root,
        silent,
        log_level,
        log_file,
    })?;
    Ok(())
}
