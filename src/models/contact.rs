//! Contact record: a named person with phone numbers and an optional birthday.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{ContactError, ContactResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the directory.
///
/// The name is fixed at creation. Phones keep insertion order and may contain
/// duplicates; every stored phone has passed validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRecord {
    /// Key the record is stored under
    name: ContactName,

    /// Phone numbers in the order they were added
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    /// Birthday, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `name` is blank.
    pub fn new(name: impl Into<String>) -> ContactResult<Self> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number. Duplicates are kept.
    pub fn add_phone(&mut self, number: &str) -> ContactResult<()> {
        let phone = PhoneNumber::new(number)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `number`.
    pub fn remove_phone(&mut self, number: &str) -> ContactResult<PhoneNumber> {
        let index = self.position_of(number)?;
        Ok(self.phones.remove(index))
    }

    /// Replace `old` with `new`.
    ///
    /// Fails without touching the record when `old` is absent or `new` is
    /// invalid. On success `new` is appended and `old` removed, so the edited
    /// number moves to the end of the list.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactResult<()> {
        let index = self.position_of(old)?;
        let replacement = PhoneNumber::new(new)?;

        self.phones.push(replacement);
        self.phones.remove(index);
        Ok(())
    }

    /// First phone equal to `number`, if any.
    pub fn find_phone(&self, number: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| phone.as_str() == number)
    }

    /// Validate and store a birthday, replacing any previous one.
    pub fn set_birthday(&mut self, raw: &str) -> ContactResult<()> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    /// Human-readable one-line summary used by displays.
    pub fn describe(&self) -> String {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = self
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| "not set".to_string());

        format!(
            "Contact name: {}, phones: {}, birthday: {}.",
            self.name, phones, birthday
        )
    }

    fn position_of(&self, number: &str) -> ContactResult<usize> {
        self.phones
            .iter()
            .position(|phone| phone.as_str() == number)
            .ok_or_else(|| ContactError::PhoneNotFound {
                name: self.name.to_string(),
                phone: number.to_string(),
            })
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
