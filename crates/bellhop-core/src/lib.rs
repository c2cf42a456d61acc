// Rust guideline compliant 2026-10-18

//! Bellhop Core Library
//!
//! This crate provides the foundational components for the Bellhop staff-call log:
//! - Data model (Ticket, Status) and its pending → resolved lifecycle
//! - Ticket id generation
//! - Bounded JSON ticket store
//! - Configuration loading
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod identity;
pub mod models;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use models::{Status, Ticket, DEFAULT_PRIORITY, URGENT_PRIORITY};
pub use store::{TicketStore, DEFAULT_CAPACITY};
