// Rust guideline compliant 2026-10-18

//! Shared application services for Bellhop.
//!
//! This crate provides the domain operations behind every front end (MCP
//! tools and the CLI): filing, listing and resolving tickets, the pluggable
//! alert capability, the operator console banner, desk discovery, and
//! standardized error envelopes.

pub mod alert;
pub mod console;
pub mod desk;
pub mod error;
pub mod response;
pub mod service;
pub mod time;

pub use alert::{AlertError, AlertLevel, Alerter, SilentAlerter, TerminalBell, Tone};
pub use console::render_summary;
pub use desk::DeskContext;
pub use error::{AppError, ErrorCode, Result};
pub use response::ErrorEnvelope;
pub use service::{
    FiledTicket, PendingSummary, ResolveOutcome, ServiceSettings, TicketRequest, TicketService,
};
pub use time::now_local;
