// Rust guideline compliant 2026-10-18

//! Ticket service: the domain operations offered to callers.
//!
//! Every operation is a single synchronous attempt against the injected
//! [`TicketStore`]. Filing also rings the configured [`Alerter`] and prints a
//! console banner; both are best-effort and never fail the filing.

use crate::alert::{AlertLevel, Alerter};
use crate::console::render_summary;
use crate::error::{AppError, Result};
use crate::time::now_local;
use bellhop_core::{identity, Config, Ticket, TicketStore, DEFAULT_PRIORITY};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

/// Maximum number of ids reported by [`TicketService::list_pending`].
pub const RECENT_PENDING_LIMIT: usize = 5;

const URGENT_RESPONSE_TIME: &str = "1 minute";
const NORMAL_RESPONSE_TIME: &str = "2-3 minutes";

/// Defaults and switches the service applies when filing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    /// Guest language used when the request omits one.
    pub default_language: String,
    /// Location used when the request omits one.
    pub default_location: String,
    /// Whether to ring the alerter on filing.
    pub alert_enabled: bool,
    /// Whether to print the console banner on filing.
    pub console_summary: bool,
}

impl From<&Config> for ServiceSettings {
    fn from(config: &Config) -> Self {
        Self {
            default_language: config.default_language.clone(),
            default_location: config.default_location.clone(),
            alert_enabled: config.alert_enabled,
            console_summary: config.console_summary,
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// A request to call staff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketRequest {
    /// Why staff is needed.
    pub reason: String,
    /// Language the guest is speaking.
    pub guest_language: Option<String>,
    /// Free-form priority; `urgent` escalates.
    pub priority: Option<String>,
    /// Where the guest is waiting.
    pub location: Option<String>,
    /// Extra context for the attendant.
    pub additional_info: Option<String>,
}

impl TicketRequest {
    /// Creates a request with only a reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            ..Self::default()
        }
    }

    /// Sets the priority.
    #[must_use]
    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the guest language.
    #[must_use]
    pub fn guest_language(mut self, language: impl Into<String>) -> Self {
        self.guest_language = Some(language.into());
        self
    }

    /// Sets the location.
    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the additional info.
    #[must_use]
    pub fn additional_info(mut self, info: impl Into<String>) -> Self {
        self.additional_info = Some(info.into());
        self
    }
}

/// Confirmation returned after filing a ticket.
#[derive(Debug, Clone, Serialize)]
pub struct FiledTicket {
    /// Always true; failures surface as errors.
    pub success: bool,
    /// Id of the new ticket.
    pub ticket_number: String,
    /// Fixed human-readable confirmation.
    pub message: String,
    /// Expected wait for the guest.
    pub estimated_response_time: String,
    /// The ticket as stored.
    #[serde(skip)]
    pub ticket: Ticket,
}

/// Pending ticket overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingSummary {
    /// Number of pending tickets in the log.
    pub pending_count: usize,
    /// Ids of the most recent pending tickets, oldest first.
    pub pending_tickets: Vec<String>,
}

/// Result of a resolve attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveOutcome {
    /// Whether the ticket was resolved by this call.
    pub success: bool,
    /// Human-readable result naming the ticket.
    pub message: String,
}

/// Returns the response-time estimate for a priority.
#[must_use]
pub fn estimated_response_time(priority: &str) -> &'static str {
    if AlertLevel::for_priority(priority) == AlertLevel::Urgent {
        URGENT_RESPONSE_TIME
    } else {
        NORMAL_RESPONSE_TIME
    }
}

/// Domain operations over a ticket store.
#[derive(Clone)]
pub struct TicketService {
    store: TicketStore,
    settings: ServiceSettings,
    alerter: Arc<dyn Alerter>,
}

impl TicketService {
    /// Creates a service over `store`.
    pub fn new(store: TicketStore, settings: ServiceSettings, alerter: Arc<dyn Alerter>) -> Self {
        Self {
            store,
            settings,
            alerter,
        }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &TicketStore {
        &self.store
    }

    /// Returns the active settings.
    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }

    /// Files a new pending ticket and notifies the operator.
    ///
    /// # Arguments
    ///
    /// * `request` - Reason plus optional overrides of the configured defaults
    ///
    /// # Returns
    ///
    /// The confirmation handed back to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The reason is blank
    /// - The ticket log cannot be written
    pub fn file_ticket(&self, request: TicketRequest) -> Result<FiledTicket> {
        if request.reason.trim().is_empty() {
            return Err(AppError::InvalidInput("Reason cannot be empty".to_string()));
        }

        let created_at = now_local();
        let taken: HashSet<String> = self.store.load().into_iter().map(|t| t.id).collect();
        let id = identity::generate_unique_id(created_at, &request.reason, |candidate| {
            taken.contains(candidate)
        });

        let mut ticket = Ticket::new(id, request.reason, created_at);
        ticket.guest_language = request
            .guest_language
            .unwrap_or_else(|| self.settings.default_language.clone());
        ticket.priority = request
            .priority
            .unwrap_or_else(|| DEFAULT_PRIORITY.to_string());
        ticket.location = request
            .location
            .unwrap_or_else(|| self.settings.default_location.clone());
        ticket.additional_info = request.additional_info.unwrap_or_default();

        self.store.append(ticket.clone())?;

        if self.settings.alert_enabled {
            let level = AlertLevel::for_priority(&ticket.priority);
            if let Err(err) = self.alerter.alert(level) {
                tracing::warn!(ticket = %ticket.id, error = %err, "alert failed");
            }
        }

        if self.settings.console_summary {
            eprint!("{}", render_summary(&ticket));
        }
        tracing::info!(
            ticket = %ticket.id,
            priority = %ticket.priority,
            location = %ticket.location,
            "staff call filed"
        );

        Ok(FiledTicket {
            success: true,
            ticket_number: ticket.id.clone(),
            message: format!("Staff has been notified. Ticket number: {}", ticket.id),
            estimated_response_time: estimated_response_time(&ticket.priority).to_string(),
            ticket,
        })
    }

    /// Returns all pending tickets in creation order.
    pub fn pending_tickets(&self) -> Vec<Ticket> {
        self.store
            .load()
            .into_iter()
            .filter(Ticket::is_pending)
            .collect()
    }

    /// Counts pending tickets and lists the most recent ids.
    pub fn list_pending(&self) -> PendingSummary {
        let pending = self.pending_tickets();
        let start = pending.len().saturating_sub(RECENT_PENDING_LIMIT);
        PendingSummary {
            pending_count: pending.len(),
            pending_tickets: pending[start..].iter().map(|t| t.id.clone()).collect(),
        }
    }

    /// Marks a pending ticket resolved.
    ///
    /// An unknown or already resolved id yields an unsuccessful outcome rather
    /// than an error, and the log is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticket log cannot be written.
    pub fn resolve_ticket(&self, id: &str) -> Result<ResolveOutcome> {
        let resolved_at = now_local();
        match self.store.update(id, |ticket| ticket.resolve(resolved_at)) {
            Ok(true) => {
                tracing::info!(ticket = %id, "staff call resolved");
                Ok(ResolveOutcome {
                    success: true,
                    message: format!("Ticket {} marked as resolved", id),
                })
            }
            Ok(false) => Ok(ResolveOutcome {
                success: false,
                message: format!("Ticket {} not found", id),
            }),
            Err(bellhop_core::Error::InvalidTransition(_)) => Ok(ResolveOutcome {
                success: false,
                message: format!("Ticket {} is already resolved", id),
            }),
            Err(err) => Err(err.into()),
        }
    }

    /// Looks up a single ticket.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no ticket has that id.
    pub fn show_ticket(&self, id: &str) -> Result<Ticket> {
        self.store
            .find(id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }
}
