//! Pluggable rendering of directory state and messages.
//!
//! The core never prints. Command handlers hand plain data to a
//! `UserDisplay`, and the binary picks the concrete renderer.

mod console;

pub use console::ConsoleDisplay;

use crate::models::{ContactRecord, Directory};

/// Rendering capability used by the command layer.
pub trait UserDisplay {
    /// Render a single contact.
    fn show_contact(&mut self, record: &ContactRecord);

    /// Render every contact in directory order.
    fn show_all_contacts(&mut self, directory: &Directory);

    /// Render an informational message.
    fn show_message(&mut self, message: &str);

    /// Render an error message.
    fn show_error(&mut self, error: &str);

    /// Ask for the next command.
    fn show_prompt(&mut self, prompt: &str) {
        self.show_message(prompt);
    }
}
