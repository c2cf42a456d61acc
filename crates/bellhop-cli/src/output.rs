// Rust guideline compliant 2026-10-18

//! Output formatting module for the Bellhop CLI.
//!
//! This module renders tickets and service results either as JSON for
//! scripts or as human-readable tables.

use bellhop_app::{FiledTicket, PendingSummary, ResolveOutcome};
use bellhop_core::{Status, Ticket};
use serde_json::json;
use tabled::{builder::Builder, settings::Style};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Output formatter trait.
///
/// Defines the interface for rendering Bellhop data in different formats.
pub trait OutputFormatter {
    /// Formats a single ticket.
    fn format_ticket(&self, ticket: &Ticket) -> String;

    /// Formats a list of tickets.
    fn format_list(&self, tickets: &[Ticket]) -> String;

    /// Formats the confirmation of a filed ticket.
    fn format_filed(&self, filed: &FiledTicket) -> String;

    /// Formats the pending overview.
    fn format_summary(&self, summary: &PendingSummary) -> String;

    /// Formats a resolve outcome.
    fn format_outcome(&self, outcome: &ResolveOutcome) -> String;
}

/// JSON output formatter.
///
/// Emits the same payloads the MCP tools return.
pub struct JsonFormatter;

impl JsonFormatter {
    fn render<T: serde::Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize output" }).to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_ticket(&self, ticket: &Ticket) -> String {
        Self::render(ticket)
    }

    fn format_list(&self, tickets: &[Ticket]) -> String {
        Self::render(&json!({
            "tickets": tickets,
            "total": tickets.len(),
        }))
    }

    fn format_filed(&self, filed: &FiledTicket) -> String {
        Self::render(filed)
    }

    fn format_summary(&self, summary: &PendingSummary) -> String {
        Self::render(summary)
    }

    fn format_outcome(&self, outcome: &ResolveOutcome) -> String {
        Self::render(outcome)
    }
}

/// Table output formatter.
pub struct TableFormatter;

fn status_label(status: Status) -> &'static str {
    match status {
        Status::Pending => "pending",
        Status::Resolved => "resolved",
    }
}

impl OutputFormatter for TableFormatter {
    fn format_ticket(&self, ticket: &Ticket) -> String {
        let mut output = String::new();

        output.push_str(&format!("Ticket:      {}\n", ticket.id));
        output.push_str(&format!("Status:      {}\n", status_label(ticket.status)));
        output.push_str(&format!("Priority:    {}\n", ticket.priority));
        output.push_str(&format!("Reason:      {}\n", ticket.reason));
        output.push_str(&format!("Language:    {}\n", ticket.guest_language));
        output.push_str(&format!("Location:    {}\n", ticket.location));
        output.push_str(&format!(
            "Created:     {}\n",
            ticket.created_at.format(TIME_FORMAT)
        ));

        if let Some(resolved_at) = ticket.resolved_at {
            output.push_str(&format!("Resolved:    {}\n", resolved_at.format(TIME_FORMAT)));
        }

        if !ticket.additional_info.is_empty() {
            output.push_str(&format!("Info:        {}\n", ticket.additional_info));
        }

        output
    }

    fn format_list(&self, tickets: &[Ticket]) -> String {
        if tickets.is_empty() {
            return "No pending staff calls.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Ticket", "Priority", "Reason", "Language", "Location", "Created"]);

        for ticket in tickets {
            builder.push_record(vec![
                ticket.id.clone(),
                ticket.priority.clone(),
                ticket.reason.clone(),
                ticket.guest_language.clone(),
                ticket.location.clone(),
                ticket.created_at.format(TIME_FORMAT).to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_filed(&self, filed: &FiledTicket) -> String {
        format!(
            "✓ {}\n  Estimated response time: {}",
            filed.message, filed.estimated_response_time
        )
    }

    fn format_summary(&self, summary: &PendingSummary) -> String {
        if summary.pending_count == 0 {
            return "No pending staff calls.".to_string();
        }

        let mut output = format!("Pending staff calls: {}\n", summary.pending_count);
        output.push_str("Most recent:\n");
        for id in &summary.pending_tickets {
            output.push_str(&format!("  - {}\n", id));
        }
        output
    }

    fn format_outcome(&self, outcome: &ResolveOutcome) -> String {
        let mark = if outcome.success { "✓" } else { "✗" };
        format!("{} {}", mark, outcome.message)
    }
}

/// Creates the formatter for the requested mode.
///
/// # Arguments
/// * `json` - Whether to emit JSON instead of tables
pub fn create_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(TableFormatter)
    }
}
