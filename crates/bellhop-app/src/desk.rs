// Rust guideline compliant 2026-10-18

//! Desk discovery and path management utilities.
//!
//! A desk is the directory holding `bellhop.toml` and the ticket log. Unlike a
//! repository it needs no initialization: a fresh directory is a valid desk
//! with default configuration and an empty log.

use crate::alert::Alerter;
use crate::error::Result;
use crate::service::{ServiceSettings, TicketService};
use bellhop_core::{config::CONFIG_FILE, Config, TicketStore};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Resolved paths and configuration for a desk.
#[derive(Debug, Clone)]
pub struct DeskContext {
    root: PathBuf,
    config: Config,
}

impl DeskContext {
    /// Opens a desk rooted at `root`, or at the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current directory cannot be resolved
    /// - The configuration cannot be loaded
    pub fn open(root: Option<&Path>) -> Result<Self> {
        let root = match root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let config = Config::load(&root)?;
        Ok(Self { root, config })
    }

    /// Builds a desk from an already loaded configuration.
    #[must_use]
    pub fn with_config(root: PathBuf, config: Config) -> Self {
        Self { root, config }
    }

    /// Returns the desk root.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// Returns the ticket log path.
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.root.join(&self.config.store_file)
    }

    /// Opens the ticket store with the configured retention limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be initialized.
    pub fn open_store(&self) -> Result<TicketStore> {
        Ok(TicketStore::with_capacity(
            self.store_path(),
            self.config.retention_limit,
        )?)
    }

    /// Opens a ticket service over this desk's store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be initialized.
    pub fn open_service(&self, alerter: Arc<dyn Alerter>) -> Result<TicketService> {
        Ok(TicketService::new(
            self.open_store()?,
            ServiceSettings::from(&self.config),
            alerter,
        ))
    }
}
