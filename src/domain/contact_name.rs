//! Names that identify contacts in the directory.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The name a contact record is filed under.
///
/// The directory holds at most one record per name, and every command that
/// targets a contact (`phone John`, `delete John`) looks it up by this value.
/// Lookups compare the text exactly: `John` and `john` are different
/// contacts. The name is fixed when the record is created; renaming means
/// deleting the record and adding a new one.
///
/// A name with no visible characters is rejected. Surrounding whitespace is
/// otherwise kept as typed.
///
/// ```
/// use contact_directory::domain::ContactName;
///
/// let name = ContactName::new("Alice").unwrap();
/// assert_eq!(name.as_str(), "Alice");
/// assert!(ContactName::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactName(String);

impl ContactName {
    /// # Errors
    ///
    /// `ValidationError::EmptyName` when `name` is empty or only whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// The directory key for this contact.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Lets a stored name be matched directly against command arguments.
impl PartialEq<str> for ContactName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

// Snapshots store the bare name; loading one re-checks it is not blank.
impl Serialize for ContactName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContactName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
