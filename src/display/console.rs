use super::UserDisplay;
use crate::models::{ContactRecord, Directory};
use std::io::{self, Write};
use tracing::warn;

/// Plain-text renderer writing to any `Write` sink (stdout by default).
pub struct ConsoleDisplay<W: Write = io::Stdout> {
    out: W,
}

impl ConsoleDisplay<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the display and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            warn!("Failed to write to console: {}", e);
        }
    }
}

impl<W: Write> UserDisplay for ConsoleDisplay<W> {
    fn show_contact(&mut self, record: &ContactRecord) {
        self.write_line(&record.describe());
    }

    fn show_all_contacts(&mut self, directory: &Directory) {
        if directory.is_empty() {
            self.write_line("No contacts found.");
            return;
        }
        for record in directory {
            self.show_contact(record);
        }
    }

    fn show_message(&mut self, message: &str) {
        self.write_line(message);
    }

    fn show_error(&mut self, error: &str) {
        self.write_line(&format!("Error: {}", error));
    }

    fn show_prompt(&mut self, prompt: &str) {
        let result = write!(self.out, "{}", prompt).and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!("Failed to write prompt: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(display: ConsoleDisplay<Vec<u8>>) -> String {
        String::from_utf8(display.into_inner()).unwrap()
    }

    #[test]
    fn test_show_message_and_error() {
        let mut display = ConsoleDisplay::new(Vec::new());
        display.show_message("Contact added.");
        display.show_error("Contact not found: Bob");
        assert_eq!(
            rendered(display),
            "Contact added.\nError: Contact not found: Bob\n"
        );
    }

    #[test]
    fn test_show_all_contacts_empty() {
        let mut display = ConsoleDisplay::new(Vec::new());
        display.show_all_contacts(&Directory::new());
        assert_eq!(rendered(display), "No contacts found.\n");
    }

    #[test]
    fn test_show_all_contacts_in_order() {
        let mut directory = Directory::new();
        let mut john = ContactRecord::new("John").unwrap();
        john.add_phone("1234567890").unwrap();
        directory.add_record(john);
        directory.add_record(ContactRecord::new("Amy").unwrap());

        let mut display = ConsoleDisplay::new(Vec::new());
        display.show_all_contacts(&directory);
        assert_eq!(
            rendered(display),
            "Contact name: John, phones: 1234567890, birthday: not set.\n\
             Contact name: Amy, phones: , birthday: not set.\n"
        );
    }

    #[test]
    fn test_prompt_has_no_newline() {
        let mut display = ConsoleDisplay::new(Vec::new());
        display.show_prompt("Enter a command: ");
        assert_eq!(rendered(display), "Enter a command: ");
    }
}
