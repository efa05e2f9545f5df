//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Format used for both parsing and rendering birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono alone accepts unpadded fields such as "1.2.2024"; the pattern pins
// the two-digit day, two-digit month, four-digit year layout.
static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A validated birthday.
///
/// Constructed from a `DD.MM.YYYY` string that must denote a real calendar
/// date. The parsed date is kept, and `Display` renders it back in the same
/// format, so valid input round-trips unchanged.
///
/// # Example
///
/// ```
/// use contact_directory::domain::Birthday;
///
/// let birthday = Birthday::new("29.02.2024").unwrap();
/// assert_eq!(birthday.to_string(), "29.02.2024");
/// assert!(Birthday::new("29.02.2023").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when the layout is wrong or
    /// the date does not exist (for example `31.02.2024`).
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        if !BIRTHDAY_PATTERN.is_match(&raw) {
            return Err(ValidationError::InvalidBirthday(raw));
        }

        match NaiveDate::parse_from_str(&raw, BIRTHDAY_FORMAT) {
            Ok(date) => Ok(Self(date)),
            Err(_) => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    /// Wrap an already-valid date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The birth date itself.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("12.06.1990").unwrap();
        assert_eq!(birthday.day(), 12);
        assert_eq!(birthday.month(), 6);
        assert_eq!(birthday.year(), 1990);
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 6, 12).unwrap());
    }

    #[test]
    fn test_birthday_round_trips_to_same_string() {
        for raw in ["01.01.2000", "29.02.2024", "31.12.1999", "05.11.0987"] {
            assert_eq!(Birthday::new(raw).unwrap().to_string(), raw);
        }
    }

    #[test]
    fn test_birthday_rejects_wrong_layout() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("1.06.1990").is_err());
        assert!(Birthday::new("12.6.1990").is_err());
        assert!(Birthday::new("12.06.90").is_err());
        assert!(Birthday::new("1990-06-12").is_err());
        assert!(Birthday::new("12/06/1990").is_err());
        assert!(Birthday::new("12.06.1990 ").is_err());
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("31.02.2024").is_err());
        assert!(Birthday::new("29.02.2023").is_err());
        assert!(Birthday::new("31.04.2024").is_err());
        assert!(Birthday::new("00.01.2024").is_err());
        assert!(Birthday::new("10.13.2024").is_err());
    }

    #[test]
    fn test_birthday_error_carries_input() {
        let err = Birthday::new("31.02.2024").unwrap_err();
        assert_eq!(err, ValidationError::InvalidBirthday("31.02.2024".to_string()));
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("08.03.1985").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"08.03.1985\"");

        let parsed: Birthday = serde_json::from_str("\"08.03.1985\"").unwrap();
        assert_eq!(parsed, birthday);
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"1985-03-08\"");
        assert!(result.is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        /// Any date from 01.01.0001 to 31.12.9999.
        fn four_digit_year_date() -> impl Strategy<Value = NaiveDate> {
            (1i32..=3_652_059).prop_map(|days| NaiveDate::from_num_days_from_ce_opt(days).unwrap())
        }

        proptest! {
            #[test]
            fn formatted_dates_round_trip(date in four_digit_year_date()) {
                let raw = date.format(BIRTHDAY_FORMAT).to_string();
                let birthday = Birthday::new(raw.as_str()).unwrap();

                prop_assert_eq!(birthday.date(), date);
                prop_assert_eq!(birthday.to_string(), raw);
            }
        }
    }
}
