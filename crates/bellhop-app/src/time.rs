// Rust guideline compliant 2026-10-18

//! Timestamp helpers for Bellhop.

use chrono::{Local, NaiveDateTime};

/// Returns the current local wall-clock time.
///
/// Tickets store naive local timestamps so the log reads the way the front
/// desk clock does.
#[must_use]
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}
