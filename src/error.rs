//! Error types for the contact directory.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by record and directory operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A value object rejected its input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The record has no such phone number
    #[error("Phone number {phone} not found for {name}")]
    PhoneNotFound { name: String, phone: String },

    /// No record is stored under the name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The record exists but has no birthday
    #[error("No birthday set for {0}")]
    BirthdayNotSet(String),
}

/// Errors raised while interpreting a command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command token is not recognised
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Required arguments were not supplied
    #[error("Invalid arguments for '{command}'. Usage: {usage}")]
    MissingArguments {
        command: &'static str,
        usage: &'static str,
    },

    /// The birthday window argument is not a day count
    #[error("Invalid number of days: {0}")]
    InvalidWindow(String),

    /// A core operation failed
    #[error(transparent)]
    Contact(#[from] ContactError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        Self::Contact(ContactError::Validation(err))
    }
}

/// Errors that can occur while loading or saving the directory snapshot.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot is not valid JSON or holds invalid values
    #[error("Snapshot parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The snapshot was written by an incompatible format version
    #[error("Unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
