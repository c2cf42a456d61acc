// Rust guideline compliant 2026-10-18

//! Ticket id generation.
//!
//! Ids read `TKT-<YYYYMMDDHHMMSS>-<XXXX>`: the creation second followed by four
//! hex characters of a SHA-256 digest over the creation instant, reason and a
//! nonce. Two tickets filed within the same second still get distinct ids.

use chrono::NaiveDateTime;
use sha2::{Digest, Sha256};

/// Prefix shared by all ticket ids.
pub const ID_PREFIX: &str = "TKT-";

const SUFFIX_LEN: usize = 4;

/// Generates a ticket id for the given creation instant, reason and nonce.
#[must_use]
pub fn generate_id(created_at: NaiveDateTime, reason: &str, nonce: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(created_at.format("%Y-%m-%dT%H:%M:%S%.f").to_string().as_bytes());
    hasher.update(b"|");
    hasher.update(reason.as_bytes());
    hasher.update(b"|");
    hasher.update(nonce.to_le_bytes());
    let digest = hasher.finalize();

    let suffix: String = digest
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect::<String>()
        .chars()
        .take(SUFFIX_LEN)
        .collect();

    format!(
        "{}{}-{}",
        ID_PREFIX,
        created_at.format("%Y%m%d%H%M%S"),
        suffix
    )
}

/// Generates an id that `is_taken` rejects for no earlier nonce.
///
/// Nonces are tried from zero upward until an unused id is found.
pub fn generate_unique_id<F>(created_at: NaiveDateTime, reason: &str, is_taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut nonce = 0u32;
    loop {
        let id = generate_id(created_at, reason, nonce);
        if !is_taken(&id) {
            return id;
        }
        nonce = nonce.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn instant() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_milli_opt(14, 3, 9, 250)
            .unwrap()
    }

    #[test]
    fn test_id_format() {
        let id = generate_id(instant(), "Check-in", 0);
        assert!(id.starts_with("TKT-20261018140309-"));
        assert_eq!(id.len(), "TKT-20261018140309-".len() + SUFFIX_LEN);
        assert!(id[id.len() - SUFFIX_LEN..]
            .chars()
            .all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_id_is_deterministic() {
        assert_eq!(
            generate_id(instant(), "Check-in", 3),
            generate_id(instant(), "Check-in", 3)
        );
    }

    #[test]
    fn test_nonce_changes_suffix() {
        assert_ne!(
            generate_id(instant(), "Check-in", 0),
            generate_id(instant(), "Check-in", 1)
        );
    }

    #[test]
    fn test_unique_id_skips_taken() {
        let mut taken = HashSet::new();
        for _ in 0..25 {
            let id = generate_unique_id(instant(), "Check-in", |candidate| {
                taken.contains(candidate)
            });
            assert!(taken.insert(id), "generated id was already taken");
        }
        assert_eq!(taken.len(), 25);
    }
}
