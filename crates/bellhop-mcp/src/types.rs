// Rust guideline compliant 2026-10-18

//! MCP tool input and output types for Bellhop.

use bellhop_core::Ticket;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input parameters for the `call_staff` tool.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct CallStaffInput {
    /// Why staff is needed (e.g. "Guest wants to check in", "Payment question").
    pub reason: String,
    /// Language the guest is speaking (Korean, English, Japanese, Chinese). Defaults to Korean.
    pub guest_language: Option<String>,
    /// "normal", "high", or "urgent" (use urgent for emergencies). Defaults to normal.
    pub priority: Option<String>,
    /// Any additional context to help staff.
    pub additional_info: Option<String>,
}

/// Empty input for tools without parameters.
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct EmptyInput {}

/// Input parameters for the `resolve_staff_call` tool.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ResolveInput {
    /// Ticket number returned by `call_staff`.
    pub ticket_number: String,
}

/// Payload of the `bellhop://pending` resource.
#[derive(Debug, Clone, Serialize)]
pub struct PendingResource {
    /// Pending tickets, oldest first.
    pub tickets: Vec<Ticket>,
    /// Number of pending tickets.
    pub total: usize,
}
