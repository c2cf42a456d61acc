// Rust guideline compliant 2026-10-18

//! End-to-end command flows against a temporary desk.

use bellhop_app::TicketRequest;
use bellhop_cli::{commands, create_formatter};
use bellhop_core::{Config, Status, TicketStore};
use tempfile::TempDir;

/// Creates a desk that never prints the console banner.
fn init_desk() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let config = Config {
        console_summary: false,
        alert_enabled: false,
        ..Config::default()
    };
    config.save(temp.path()).expect("Failed to save config");
    temp
}

fn store_for(temp: &TempDir) -> TicketStore {
    TicketStore::new(temp.path().join("hotel_notifications.json")).expect("Failed to open store")
}

#[test]
fn test_call_then_resolve() {
    let temp = init_desk();
    let formatter = create_formatter(true);

    commands::call::execute(
        Some(temp.path()),
        true,
        TicketRequest::new("Check-in").priority("urgent"),
        formatter.as_ref(),
    )
    .expect("call failed");

    let tickets = store_for(&temp).load();
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].priority, "urgent");
    assert_eq!(tickets[0].location, "Front Desk Kiosk");
    assert_eq!(tickets[0].status, Status::Pending);

    let resolved = commands::resolve::execute(Some(temp.path()), &tickets[0].id, formatter.as_ref())
        .expect("resolve failed");
    assert!(resolved);
    assert_eq!(store_for(&temp).load()[0].status, Status::Resolved);
}

#[test]
fn test_call_with_location_override() {
    let temp = init_desk();
    let formatter = create_formatter(false);

    commands::call::execute(
        Some(temp.path()),
        true,
        TicketRequest::new("Lost item")
            .location("Pool Deck")
            .additional_info("Blue umbrella"),
        formatter.as_ref(),
    )
    .expect("call failed");

    let ticket = &store_for(&temp).load()[0];
    assert_eq!(ticket.location, "Pool Deck");
    assert_eq!(ticket.additional_info, "Blue umbrella");
}

#[test]
fn test_resolve_unknown_reports_failure() {
    let temp = init_desk();
    let formatter = create_formatter(false);

    let resolved = commands::resolve::execute(Some(temp.path()), "TKT-unknown", formatter.as_ref())
        .expect("resolve should not error");
    assert!(!resolved);
    assert!(!temp.path().join("hotel_notifications.json").exists());
}

#[test]
fn test_show_unknown_is_error() {
    let temp = init_desk();
    let formatter = create_formatter(false);

    assert!(commands::show::execute(Some(temp.path()), "TKT-unknown", formatter.as_ref()).is_err());
}

#[test]
fn test_status_and_pending_on_empty_desk() {
    let temp = init_desk();
    let formatter = create_formatter(false);

    commands::status::execute(Some(temp.path()), formatter.as_ref()).expect("status failed");
    commands::pending::execute(Some(temp.path()), formatter.as_ref()).expect("pending failed");
}

#[test]
fn test_invalid_config_is_reported() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(temp.path().join("bellhop.toml"), "retention_limit = 0").expect("write");
    let formatter = create_formatter(false);

    assert!(commands::status::execute(Some(temp.path()), formatter.as_ref()).is_err());
}
