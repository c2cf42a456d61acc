// Rust guideline compliant 2026-10-18

//! Configuration management for Bellhop.

use crate::store::DEFAULT_CAPACITY;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the configuration file inside the desk root.
pub const CONFIG_FILE: &str = "bellhop.toml";

/// Configuration for Bellhop behavior.
///
/// Fixed at process start; nothing reloads it at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Guest language recorded when the caller gives none.
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Location label recorded on every ticket unless overridden.
    #[serde(default = "default_location")]
    pub default_location: String,

    /// Whether filing a ticket rings the terminal bell.
    #[serde(default = "default_true")]
    pub alert_enabled: bool,

    /// Whether filing a ticket prints a banner to the operator console.
    #[serde(default = "default_true")]
    pub console_summary: bool,

    /// Maximum number of tickets kept in the log.
    #[serde(default = "default_retention_limit")]
    pub retention_limit: usize,

    /// Ticket log file name, relative to the desk root.
    #[serde(default = "default_store_file")]
    pub store_file: String,
}

fn default_language() -> String {
    "Korean".to_string()
}

fn default_location() -> String {
    "Front Desk Kiosk".to_string()
}

fn default_true() -> bool {
    true
}

fn default_retention_limit() -> usize {
    DEFAULT_CAPACITY
}

fn default_store_file() -> String {
    "hotel_notifications.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            default_location: default_location(),
            alert_enabled: true,
            console_summary: true,
            retention_limit: default_retention_limit(),
            store_file: default_store_file(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<root>/bellhop.toml`
    /// 3. Environment variables with `BELLHOP_` prefix
    ///
    /// # Arguments
    ///
    /// * `root` - Desk root directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| crate::Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `BELLHOP_DEFAULT_LANGUAGE`
    /// - `BELLHOP_DEFAULT_LOCATION`
    /// - `BELLHOP_ALERT_ENABLED` (true/false)
    /// - `BELLHOP_CONSOLE_SUMMARY` (true/false)
    /// - `BELLHOP_RETENTION_LIMIT` (positive number)
    /// - `BELLHOP_STORE_FILE`
    ///
    /// # Errors
    ///
    /// Returns an error if a boolean or numeric variable cannot be parsed.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("BELLHOP_DEFAULT_LANGUAGE") {
            self.default_language = val;
        }

        if let Ok(val) = std::env::var("BELLHOP_DEFAULT_LOCATION") {
            self.default_location = val;
        }

        if let Ok(val) = std::env::var("BELLHOP_ALERT_ENABLED") {
            self.alert_enabled = val.parse().map_err(|_| {
                crate::Error::InvalidConfig(
                    "BELLHOP_ALERT_ENABLED must be true or false".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("BELLHOP_CONSOLE_SUMMARY") {
            self.console_summary = val.parse().map_err(|_| {
                crate::Error::InvalidConfig(
                    "BELLHOP_CONSOLE_SUMMARY must be true or false".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("BELLHOP_RETENTION_LIMIT") {
            self.retention_limit = val.parse().map_err(|_| {
                crate::Error::InvalidConfig(
                    "BELLHOP_RETENTION_LIMIT must be a positive number".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("BELLHOP_STORE_FILE") {
            self.store_file = val;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - default_language, default_location or store_file is blank
    /// - retention_limit is zero
    fn validate(&self) -> Result<()> {
        if self.default_language.trim().is_empty() {
            return Err(crate::Error::InvalidConfig(
                "default_language cannot be empty".to_string(),
            ));
        }

        if self.default_location.trim().is_empty() {
            return Err(crate::Error::InvalidConfig(
                "default_location cannot be empty".to_string(),
            ));
        }

        if self.store_file.trim().is_empty() {
            return Err(crate::Error::InvalidConfig(
                "store_file cannot be empty".to_string(),
            ));
        }

        if self.retention_limit == 0 {
            return Err(crate::Error::InvalidConfig(
                "retention_limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Saves the configuration to `<root>/bellhop.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, root: &Path) -> Result<()> {
        let config_path = root.join(CONFIG_FILE);
        let content = toml::to_string_pretty(self).map_err(|e| {
            crate::Error::InvalidConfig(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
