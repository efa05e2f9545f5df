use contact_directory::display::UserDisplay;
use contact_directory::models::{ContactRecord, Directory};

/// One rendering call captured by `RecordingDisplay`.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Contact(String),
    AllContacts(Vec<String>),
    Message(String),
    Error(String),
}

/// Display double that records every call instead of printing.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub shown: Vec<Shown>,
    pub prompts: usize,
}

#[allow(dead_code)]
impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every message shown, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.shown
            .iter()
            .filter_map(|s| match s {
                Shown::Message(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every error shown, in order.
    pub fn errors(&self) -> Vec<&str> {
        self.shown
            .iter()
            .filter_map(|s| match s {
                Shown::Error(e) => Some(e.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn last(&self) -> Option<&Shown> {
        self.shown.last()
    }

    pub fn clear(&mut self) {
        self.shown.clear();
    }
}

impl UserDisplay for RecordingDisplay {
    fn show_contact(&mut self, record: &ContactRecord) {
        self.shown.push(Shown::Contact(record.name().to_string()));
    }

    fn show_all_contacts(&mut self, directory: &Directory) {
        let names = directory.iter().map(|r| r.name().to_string()).collect();
        self.shown.push(Shown::AllContacts(names));
    }

    fn show_message(&mut self, message: &str) {
        self.shown.push(Shown::Message(message.to_string()));
    }

    fn show_error(&mut self, error: &str) {
        self.shown.push(Shown::Error(error.to_string()));
    }

    fn show_prompt(&mut self, _prompt: &str) {
        self.prompts += 1;
    }
}
