// Rust guideline compliant 2026-10-18

//! Operator console banner for newly filed tickets.

use bellhop_core::Ticket;

const RULE_WIDTH: usize = 60;

/// Renders the multi-line banner announcing a ticket.
///
/// The `Info` line appears only when the ticket carries additional info.
#[must_use]
pub fn render_summary(ticket: &Ticket) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut output = String::new();

    output.push('\n');
    output.push_str(&rule);
    output.push('\n');
    output.push_str(&format!(
        "STAFF NOTIFICATION - {}\n",
        ticket.priority.to_uppercase()
    ));
    output.push_str(&rule);
    output.push('\n');
    output.push_str(&format!("Ticket:   {}\n", ticket.id));
    output.push_str(&format!(
        "Time:     {}\n",
        ticket.created_at.format("%Y-%m-%d %H:%M:%S")
    ));
    output.push_str(&format!("Reason:   {}\n", ticket.reason));
    output.push_str(&format!("Language: {}\n", ticket.guest_language));
    output.push_str(&format!("Location: {}\n", ticket.location));
    if !ticket.additional_info.is_empty() {
        output.push_str(&format!("Info:     {}\n", ticket.additional_info));
    }
    output.push_str(&rule);
    output.push('\n');

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ticket() -> Ticket {
        let created_at = NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(21, 15, 2)
            .unwrap();
        let mut ticket = Ticket::new("TKT-1".to_string(), "Payment".to_string(), created_at);
        ticket.priority = "high".to_string();
        ticket.guest_language = "English".to_string();
        ticket.location = "Front Desk Kiosk".to_string();
        ticket
    }

    #[test]
    fn test_summary_contents() {
        let summary = render_summary(&ticket());
        assert!(summary.contains("STAFF NOTIFICATION - HIGH"));
        assert!(summary.contains("Ticket:   TKT-1"));
        assert!(summary.contains("Time:     2026-10-18 21:15:02"));
        assert!(summary.contains("Reason:   Payment"));
        assert!(summary.contains("Language: English"));
        assert!(summary.contains("Location: Front Desk Kiosk"));
        assert!(!summary.contains("Info:"));
        assert_eq!(summary.matches(&"=".repeat(60)).count(), 3);
    }

    #[test]
    fn test_summary_includes_info_when_present() {
        let mut ticket = ticket();
        ticket.additional_info = "Card declined twice".to_string();
        assert!(render_summary(&ticket).contains("Info:     Card declined twice"));
    }
}
