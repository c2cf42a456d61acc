// Rust guideline compliant 2026-10-18

//! Storage module for the ticket log.
//!
//! Tickets live in a single pretty-printed JSON array. Every mutation reads
//! the whole file, changes it in memory, and rewrites it through a temp file
//! and rename. The log is bounded: once it holds more than `capacity` tickets
//! the oldest are dropped.

use crate::{Error, Result, Ticket};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

/// Number of tickets retained when no explicit capacity is given.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Bounded, ordered ticket store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct TicketStore {
    /// Path to the JSON file.
    path: PathBuf,
    /// Maximum number of tickets retained.
    capacity: usize,
}

impl TicketStore {
    /// Creates a store with the default capacity.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        Self::with_capacity(path, DEFAULT_CAPACITY)
    }

    /// Creates a store retaining at most `capacity` tickets.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file
    /// * `capacity` - Maximum number of tickets kept on disk
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty or the capacity is zero.
    pub fn with_capacity(path: PathBuf, capacity: usize) -> Result<Self> {
        Self::validate_path(&path)?;
        if capacity == 0 {
            return Err(Error::InvalidConfig(
                "Store capacity must be greater than 0".to_string(),
            ));
        }
        Ok(Self { path, capacity })
    }

    fn validate_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(())
    }

    /// Returns the JSON file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the retention bound.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl TicketStore {
    /// Loads all tickets in creation order.
    ///
    /// A missing, unreadable or malformed file yields an empty history rather
    /// than an error. Every record that deserializes is returned as-is, valid
    /// or not; writes rewrite exactly this list.
    pub fn load(&self) -> Vec<Ticket> {
        if !self.path.exists() {
            return Vec::new();
        }

        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "ticket log unreadable; treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(tickets) => tickets,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "ticket log malformed; treating as empty");
                Vec::new()
            }
        }
    }

    /// Finds a ticket by id.
    pub fn find(&self, id: &str) -> Option<Ticket> {
        self.load().into_iter().find(|ticket| ticket.id == id)
    }
}

impl TicketStore {
    /// Appends a ticket, evicting the oldest entries beyond capacity.
    ///
    /// # Arguments
    ///
    /// * `ticket` - The ticket to append
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The ticket fails validation
    /// - The file cannot be written
    pub fn append(&self, ticket: Ticket) -> Result<()> {
        ticket.validate()?;

        let mut tickets = self.load();
        tickets.push(ticket);

        if tickets.len() > self.capacity {
            let excess = tickets.len() - self.capacity;
            tickets.drain(..excess);
            tracing::debug!(evicted = excess, "ticket log trimmed to capacity");
        }

        self.save_all(&tickets)
    }

    /// Applies `mutator` to the first ticket with the given id.
    ///
    /// # Arguments
    ///
    /// * `id` - Ticket id to match
    /// * `mutator` - Change to apply to the matched ticket
    ///
    /// # Returns
    ///
    /// `Ok(true)` if a ticket was found and rewritten, `Ok(false)` if no
    /// ticket matched (the file is left untouched).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The mutator fails (nothing is written)
    /// - The mutated ticket's status and resolution time disagree
    /// - The file cannot be written
    ///
    /// Only the lifecycle fields are checked, so records written before the
    /// log required a reason can still be resolved.
    pub fn update<F>(&self, id: &str, mutator: F) -> Result<bool>
    where
        F: FnOnce(&mut Ticket) -> Result<()>,
    {
        let mut tickets = self.load();
        let Some(ticket) = tickets.iter_mut().find(|ticket| ticket.id == id) else {
            return Ok(false);
        };

        mutator(ticket)?;
        ticket.validate_lifecycle()?;

        self.save_all(&tickets)?;
        Ok(true)
    }

    /// Replaces the file contents with `tickets`.
    ///
    /// Writes to a sibling temp file and renames it over the target.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any filesystem step fails.
    pub fn save_all(&self, tickets: &[Ticket]) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");

        {
            let mut file = File::create(&temp_path)?;
            serde_json::to_writer_pretty(&mut file, tickets)?;
            file.write_all(b"\n")?;
            file.sync_all()?;
        }

        std::fs::rename(&temp_path, &self.path)?;
        tracing::debug!(path = %self.path.display(), count = tickets.len(), "ticket log rewritten");

        Ok(())
    }
}
