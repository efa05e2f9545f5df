//! Birthday scheduling.
//!
//! Decides whether a birthday falls inside the reminder window and on which
//! day the congratulation should land (weekends move to the next Monday).

pub mod scheduler;

pub use scheduler::{
    adjust_for_weekend, congratulation_date, days_until_birthday, next_anniversary,
    next_weekday, project_birthday,
};

use crate::domain::BIRTHDAY_FORMAT;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Default number of days ahead that counts as "upcoming".
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// One row of the upcoming-birthdays report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: String,

    /// Day to congratulate, already shifted off weekends
    #[serde(serialize_with = "serialize_date")]
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// Congratulation date rendered as `DD.MM.YYYY`.
    pub fn formatted_date(&self) -> String {
        self.congratulation_date.format(BIRTHDAY_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.formatted_date())
    }
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&date.format(BIRTHDAY_FORMAT))
}
