// Rust guideline compliant 2026-10-18

//! Error envelope for tool and resource outputs.

use crate::error::{AppError, ErrorCode};
use serde::Serialize;

/// Standard error envelope for tool and resource responses.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Stable error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Creates a new error envelope from an application error.
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        Self {
            code: error.code(),
            message: error.to_string(),
            details: error.details(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_serialization() {
        let envelope = ErrorEnvelope::from_error(&AppError::NotFound("TKT-3".to_string()));
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["code"], "not_found");
        assert_eq!(json["message"], "Ticket TKT-3 not found");
        assert_eq!(json["details"]["ticket_number"], "TKT-3");
    }

    #[test]
    fn test_envelope_omits_empty_details() {
        let envelope = ErrorEnvelope::from_error(&AppError::InvalidInput("bad".to_string()));
        let json = serde_json::to_string(&envelope).unwrap();
        assert!(!json.contains("details"));
    }
}
