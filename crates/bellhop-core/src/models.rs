// Rust guideline compliant 2026-10-18

//! Core data model for Bellhop.
//!
//! A [`Ticket`] records one request for a human attendant. Tickets move through
//! a two-state lifecycle: they are created `pending` and resolved at most once.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Priority assigned when the caller does not supply one.
pub const DEFAULT_PRIORITY: &str = "normal";

/// The only priority value that receives escalated handling.
pub const URGENT_PRIORITY: &str = "urgent";

/// Lifecycle status of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Waiting for a staff member.
    Pending,
    /// A staff member has handled the request.
    Resolved,
}

impl Status {
    /// Checks if a transition to the target status is valid.
    ///
    /// Only `Pending → Resolved` is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidTransition`] for every other pair.
    pub fn can_transition_to(&self, target: Status) -> crate::Result<()> {
        match (self, target) {
            (Status::Pending, Status::Resolved) => Ok(()),
            (Status::Resolved, Status::Resolved) => Err(crate::Error::InvalidTransition(
                "Ticket is already resolved".to_string(),
            )),
            (from, to) => Err(crate::Error::InvalidTransition(format!(
                "Cannot transition from {:?} to {:?}",
                from, to
            ))),
        }
    }
}

/// A single recorded request for staff attention.
///
/// Field names on disk follow the staff notification log format
/// (`ticket_number`, `timestamp`), so existing log files load as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique identifier (format: TKT-YYYYMMDDHHMMSS-XXXX).
    #[serde(rename = "ticket_number")]
    pub id: String,
    /// Local time of creation.
    #[serde(rename = "timestamp")]
    pub created_at: NaiveDateTime,
    /// Why staff is needed.
    pub reason: String,
    /// Language the guest is speaking.
    #[serde(default)]
    pub guest_language: String,
    /// Free-form priority; only `urgent` is treated specially.
    #[serde(default = "default_priority")]
    pub priority: String,
    /// Where the guest is waiting.
    #[serde(default)]
    pub location: String,
    /// Extra context for the attendant.
    #[serde(default)]
    pub additional_info: String,
    /// Lifecycle status.
    pub status: Status,
    /// Local time of resolution, present only once resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<NaiveDateTime>,
}

fn default_priority() -> String {
    DEFAULT_PRIORITY.to_string()
}

impl Ticket {
    /// Creates a pending ticket with default priority and empty optional fields.
    pub fn new(id: String, reason: String, created_at: NaiveDateTime) -> Self {
        Self {
            id,
            created_at,
            reason,
            guest_language: String::new(),
            priority: default_priority(),
            location: String::new(),
            additional_info: String::new(),
            status: Status::Pending,
            resolved_at: None,
        }
    }

    /// Returns true if the ticket carries the escalated priority.
    #[must_use]
    pub fn is_urgent(&self) -> bool {
        self.priority == URGENT_PRIORITY
    }

    /// Returns true while the ticket awaits staff.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == Status::Pending
    }

    /// Marks the ticket resolved at the given instant.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticket is already resolved.
    pub fn resolve(&mut self, at: NaiveDateTime) -> crate::Result<()> {
        self.status.can_transition_to(Status::Resolved)?;
        self.status = Status::Resolved;
        self.resolved_at = Some(at);
        Ok(())
    }

    /// Validates the ticket data.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - ID or reason is blank
    /// - `resolved_at` disagrees with `status`
    pub fn validate(&self) -> crate::Result<()> {
        if self.id.trim().is_empty() {
            return Err(crate::Error::InvalidTicket(
                "Ticket number cannot be empty".to_string(),
            ));
        }

        if self.reason.trim().is_empty() {
            return Err(crate::Error::InvalidTicket(format!(
                "Ticket {} has an empty reason",
                self.id
            )));
        }

        self.validate_lifecycle()
    }

    /// Checks that `resolved_at` is set exactly when the ticket is resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if the status and resolution time disagree.
    pub fn validate_lifecycle(&self) -> crate::Result<()> {
        match (self.status, self.resolved_at) {
            (Status::Pending, Some(_)) => Err(crate::Error::InvalidTicket(format!(
                "Pending ticket {} has a resolution time",
                self.id
            ))),
            (Status::Resolved, None) => Err(crate::Error::InvalidTicket(format!(
                "Resolved ticket {} is missing its resolution time",
                self.id
            ))),
            _ => Ok(()),
        }
    }
}
