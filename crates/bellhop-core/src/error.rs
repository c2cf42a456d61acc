// Rust guideline compliant 2026-10-18

//! Error types for the Bellhop core library.

use thiserror::Error;

/// Result type alias for Bellhop operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Bellhop operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid ticket data.
    #[error("Invalid ticket: {0}")]
    InvalidTicket(String),

    /// Invalid configuration value.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Invalid lifecycle transition.
    #[error("Invalid state transition: {0}")]
    InvalidTransition(String),
}
