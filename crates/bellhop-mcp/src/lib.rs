// Rust guideline compliant 2026-10-18

//! MCP front end for Bellhop.
//!
//! Exposes the ticket service to an AI-agent host as the `call_staff`,
//! `get_staff_status` and `resolve_staff_call` tools over stdio.

mod server;
pub mod types;

pub use server::{run, McpOptions, McpServerError};
