// Rust guideline compliant 2026-10-18

//! Property-based tests for the ticket store.
//!
//! These tests validate the retention bound and ordering across arbitrary
//! capacities and append counts.

use bellhop_core::{Status, Ticket, TicketStore};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use tempfile::TempDir;

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn ticket(index: usize, priority: &str) -> Ticket {
    let mut ticket = Ticket::new(
        format!("TKT-{:05}", index),
        format!("Request {}", index),
        base_time() + Duration::seconds(index as i64),
    );
    ticket.priority = priority.to_string();
    ticket
}

fn arb_priority() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("normal".to_string()),
        Just("high".to_string()),
        Just("urgent".to_string()),
        prop::string::string_regex("[a-zA-Z]{0,12}").unwrap(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// The store keeps exactly the most recent `min(count, capacity)` tickets.
    #[test]
    fn prop_retains_most_recent(capacity in 1usize..15, count in 0usize..40) {
        let temp_dir = TempDir::new().unwrap();
        let store = TicketStore::with_capacity(temp_dir.path().join("log.json"), capacity).unwrap();

        for i in 0..count {
            store.append(ticket(i, "normal")).unwrap();
        }

        let ids: Vec<String> = store.load().into_iter().map(|t| t.id).collect();
        let first_kept = count.saturating_sub(capacity);
        let expected: Vec<String> = (first_kept..count).map(|i| format!("TKT-{:05}", i)).collect();
        prop_assert_eq!(ids, expected);
    }

    /// Any priority string survives a write and reload unchanged.
    #[test]
    fn prop_priority_round_trips(priorities in prop::collection::vec(arb_priority(), 1..10)) {
        let temp_dir = TempDir::new().unwrap();
        let store = TicketStore::new(temp_dir.path().join("log.json")).unwrap();

        for (i, priority) in priorities.iter().enumerate() {
            store.append(ticket(i, priority)).unwrap();
        }

        let loaded: Vec<String> = store.load().into_iter().map(|t| t.priority).collect();
        prop_assert_eq!(loaded, priorities);
    }

    /// Resolving one ticket never changes the status of the others.
    #[test]
    fn prop_update_touches_only_target(count in 1usize..20, pick in any::<prop::sample::Index>()) {
        let temp_dir = TempDir::new().unwrap();
        let store = TicketStore::new(temp_dir.path().join("log.json")).unwrap();
        for i in 0..count {
            store.append(ticket(i, "normal")).unwrap();
        }

        let target = pick.index(count);
        let target_id = format!("TKT-{:05}", target);
        prop_assert!(store.update(&target_id, |t| t.resolve(base_time())).unwrap());

        for (i, loaded) in store.load().iter().enumerate() {
            let expected = if i == target { Status::Resolved } else { Status::Pending };
            prop_assert_eq!(loaded.status, expected);
        }
    }
}
