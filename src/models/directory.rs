//! The directory: every contact record for one user, keyed by name.

use crate::birthdays::{self, UpcomingBirthday};
use crate::models::ContactRecord;
use chrono::NaiveDate;
use indexmap::map::Values;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Insertion-ordered collection of contact records with unique names.
///
/// Iteration, display, and the birthday report all follow the order in which
/// names were first added. Re-adding a name replaces the stored record in
/// place.
///
/// Serialized as a plain list of records, in directory order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ContactRecord>", into = "Vec<ContactRecord>")]
pub struct Directory {
    records: IndexMap<String, ContactRecord>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under its name.
    ///
    /// An existing record with the same name is overwritten, not merged.
    /// Callers that want update semantics should `find_mut` first.
    pub fn add_record(&mut self, record: ContactRecord) {
        self.insert(record);
    }

    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`. Absent names are a no-op.
    ///
    /// The remaining records keep their relative order.
    pub fn delete(&mut self, name: &str) -> Option<ContactRecord> {
        self.records.shift_remove(name)
    }

    /// Contacts whose next birthday falls within `window_days` of `today`.
    ///
    /// Entries follow directory order. Weekend birthdays are congratulated on
    /// the following Monday.
    pub fn upcoming_birthdays(&self, window_days: u32, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let date = birthdays::congratulation_date(birthday, today, window_days)?;
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: date,
                })
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> Values<'_, String, ContactRecord> {
        self.records.values()
    }

    /// Insert keyed by name, handing back the record it replaced.
    fn insert(&mut self, record: ContactRecord) -> Option<ContactRecord> {
        self.records.insert(record.name().to_string(), record)
    }
}

impl FromIterator<ContactRecord> for Directory {
    fn from_iter<I: IntoIterator<Item = ContactRecord>>(iter: I) -> Self {
        let mut directory = Directory::new();
        for record in iter {
            directory.add_record(record);
        }
        directory
    }
}

/// Snapshot side: a repeated name keeps the last entry and is logged.
impl From<Vec<ContactRecord>> for Directory {
    fn from(records: Vec<ContactRecord>) -> Self {
        let mut directory = Directory::new();
        for record in records {
            let name = record.name().to_string();
            if directory.insert(record).is_some() {
                warn!(name = %name, "Duplicate contact in snapshot, keeping the last entry");
            }
        }
        directory
    }
}

impl From<Directory> for Vec<ContactRecord> {
    fn from(directory: Directory) -> Self {
        directory.records.into_values().collect()
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a ContactRecord;
    type IntoIter = Values<'a, String, ContactRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
