// Rust guideline compliant 2026-10-18

use bellhop_core::{Ticket, TicketStore};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tempfile::TempDir;

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 1)
        .expect("valid date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time")
}

fn build_tickets(count: usize) -> Vec<Ticket> {
    (0..count)
        .map(|i| {
            let mut ticket = Ticket::new(
                format!("TKT-{:05}", i),
                format!("Bench request {}", i),
                base_time() + Duration::seconds(i as i64),
            );
            ticket.guest_language = "Korean".to_string();
            ticket.location = "Front Desk Kiosk".to_string();
            ticket
        })
        .collect()
}

fn setup_store(count: usize) -> (TempDir, TicketStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = TicketStore::new(temp_dir.path().join("hotel_notifications.json"))
        .expect("Failed to create store");
    store
        .save_all(&build_tickets(count))
        .expect("Failed to save benchmark tickets");
    (temp_dir, store)
}

fn bench_load_full(c: &mut Criterion) {
    let (_temp_dir, store) = setup_store(1000);
    c.bench_function("load_1000", |b| b.iter(|| black_box(store.load())));
}

fn bench_append_at_capacity(c: &mut Criterion) {
    c.bench_function("append_at_capacity", |b| {
        b.iter_batched(
            || setup_store(1000),
            |(_temp_dir, store)| {
                let ticket = Ticket::new(
                    "TKT-99999".to_string(),
                    "Bench append".to_string(),
                    base_time(),
                );
                black_box(store.append(ticket)).expect("append failed");
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_load_full, bench_append_at_capacity);
criterion_main!(benches);
