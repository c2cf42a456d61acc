// Rust guideline compliant 2026-10-18

//! Error handling for Bellhop application services.

use bellhop_core::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for tool and resource responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested ticket was not found.
    NotFound,
    /// The requested state transition is invalid.
    InvalidTransition,
    /// Ticket or configuration validation failed.
    ValidationError,
    /// The request included invalid inputs.
    InvalidInput,
    /// IO failure while reading or writing the ticket log.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No ticket carries the given number.
    #[error("Ticket {0} not found")]
    NotFound(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
                CoreError::InvalidTicket(_) | CoreError::InvalidConfig(_) => {
                    ErrorCode::ValidationError
                }
                CoreError::InvalidTransition(_) => ErrorCode::InvalidTransition,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::NotFound(id) => Some(serde_json::json!({
                "ticket_number": id,
            })),
            _ => None,
        }
    }
}
