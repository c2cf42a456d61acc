// Rust guideline compliant 2026-10-18

//! Unit tests for output formatting module.

use bellhop_app::{PendingSummary, ResolveOutcome};
use bellhop_cli::create_formatter;
use bellhop_core::Ticket;
use chrono::NaiveDate;

fn create_test_ticket(id: &str) -> Ticket {
    let created_at = NaiveDate::from_ymd_opt(2026, 10, 18)
        .expect("valid date")
        .and_hms_opt(9, 30, 0)
        .expect("valid time");
    let mut ticket = Ticket::new(id.to_string(), "Payment question".to_string(), created_at);
    ticket.guest_language = "English".to_string();
    ticket.location = "Front Desk Kiosk".to_string();
    ticket.priority = "high".to_string();
    ticket
}

#[test]
fn test_json_formatter_ticket_list() {
    let formatter = create_formatter(true);
    let output = formatter.format_list(&[
        create_test_ticket("TKT-20261018093000-aaaa"),
        create_test_ticket("TKT-20261018093001-bbbb"),
    ]);

    let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");
    assert_eq!(value["total"], 2);
    assert_eq!(value["tickets"][1]["ticket_number"], "TKT-20261018093001-bbbb");
}

#[test]
fn test_json_formatter_summary_matches_tool_payload() {
    let formatter = create_formatter(true);
    let output = formatter.format_summary(&PendingSummary {
        pending_count: 2,
        pending_tickets: vec!["TKT-1".to_string(), "TKT-2".to_string()],
    });

    let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");
    assert_eq!(
        value,
        serde_json::json!({ "pending_count": 2, "pending_tickets": ["TKT-1", "TKT-2"] })
    );
}

#[test]
fn test_table_formatter_ticket_details() {
    let formatter = create_formatter(false);
    let mut ticket = create_test_ticket("TKT-20261018093000-aaaa");
    ticket.additional_info = "Card declined".to_string();
    let output = formatter.format_ticket(&ticket);

    assert!(output.contains("Ticket:      TKT-20261018093000-aaaa"));
    assert!(output.contains("Status:      pending"));
    assert!(output.contains("Created:     2026-10-18 09:30:00"));
    assert!(output.contains("Info:        Card declined"));
    assert!(!output.contains("Resolved:"));
}

#[test]
fn test_table_formatter_list() {
    let formatter = create_formatter(false);
    let output = formatter.format_list(&[create_test_ticket("TKT-20261018093000-aaaa")]);

    assert!(output.contains("Ticket"));
    assert!(output.contains("TKT-20261018093000-aaaa"));
    assert!(output.contains("Payment question"));
}

#[test]
fn test_table_formatter_empty_list() {
    let formatter = create_formatter(false);
    assert_eq!(formatter.format_list(&[]), "No pending staff calls.");
    assert_eq!(
        formatter.format_summary(&PendingSummary {
            pending_count: 0,
            pending_tickets: vec![],
        }),
        "No pending staff calls."
    );
}

#[test]
fn test_table_formatter_outcome_marks() {
    let formatter = create_formatter(false);
    let ok = formatter.format_outcome(&ResolveOutcome {
        success: true,
        message: "Ticket TKT-1 marked as resolved".to_string(),
    });
    let failed = formatter.format_outcome(&ResolveOutcome {
        success: false,
        message: "Ticket TKT-2 not found".to_string(),
    });

    assert_eq!(ok, "✓ Ticket TKT-1 marked as resolved");
    assert_eq!(failed, "✗ Ticket TKT-2 not found");
}
