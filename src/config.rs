//! Configuration management for the contact directory.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file.

use crate::birthdays::DEFAULT_WINDOW_DAYS;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Snapshot file used when `CONTACTS_FILE` is unset.
pub const DEFAULT_CONTACTS_FILE: &str = "addressbook.json";

/// Longest birthday window accepted from the environment.
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Configuration for the contact directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the directory snapshot is stored (default: addressbook.json)
    pub contacts_file: PathBuf,

    /// Days ahead reported by `birthdays` without an argument (default: 7)
    pub birthday_window_days: u32,

    /// Log filter used when RUST_LOG is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_FILE`: Snapshot path (default: addressbook.json)
    /// - `BIRTHDAY_WINDOW_DAYS`: Default birthday window, 0-366 (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let contacts_file = match env::var("CONTACTS_FILE") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACTS_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_CONTACTS_FILE),
        };

        let birthday_window_days = Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;
        if birthday_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_WINDOW_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            contacts_file,
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contacts_file: PathBuf::from(DEFAULT_CONTACTS_FILE),
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            log_level: "warn".to_string(),
        }
    }
}
