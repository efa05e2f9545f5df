//! Contact Directory - an interactive personal address book.
//!
//! Stores named contacts with validated phone numbers and optional birthdays,
//! and reports whose birthday is coming up so they can be congratulated on a
//! working day.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: Contact records and the directory that holds them
//! - **birthdays**: Window membership and weekend-shift date logic
//! - **error**: Error types per layer
//! - **commands**: Command parsing, dispatch, and error translation
//! - **display**: Pluggable rendering
//! - **repositories**: JSON snapshot persistence
//! - **bot**: The interactive loop
//! - **config**: Configuration from environment variables

pub mod birthdays;
pub mod bot;
pub mod commands;
pub mod config;
pub mod display;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use birthdays::{UpcomingBirthday, DEFAULT_WINDOW_DAYS};
pub use bot::AssistantBot;
pub use commands::{parse_input, Clock, Command, CommandHandler, FixedClock, Outcome, SystemClock};
pub use config::Config;
pub use display::{ConsoleDisplay, UserDisplay};
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, ContactError, StorageError};
pub use models::{ContactRecord, Directory};
pub use repositories::{DirectoryStore, JsonFileStore};
