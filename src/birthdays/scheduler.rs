//! Pure date arithmetic for birthday reminders.
//!
//! Nothing here reads the clock: callers always pass `today`.

use crate::domain::Birthday;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Smallest date strictly after `from` that falls on `target`.
///
/// When `from` is already a `target` day the result is one full week later.
pub fn next_weekday(from: NaiveDate, target: Weekday) -> NaiveDate {
    let mut days_ahead = i64::from(target.num_days_from_monday())
        - i64::from(from.weekday().num_days_from_monday());
    if days_ahead <= 0 {
        days_ahead += 7;
    }
    from + Duration::days(days_ahead)
}

/// Move a Saturday or Sunday onto the following Monday.
pub fn adjust_for_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => next_weekday(date, Weekday::Mon),
        _ => date,
    }
}

/// Anniversary of `birthday` in `year`.
///
/// A 29 February birthday falls on 28 February in non-leap years.
pub fn project_birthday(birthday: &Birthday, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day() - 1))
        .unwrap_or_else(|| birthday.date())
}

/// Next anniversary of `birthday` on or after `today`.
pub fn next_anniversary(birthday: &Birthday, today: NaiveDate) -> NaiveDate {
    let this_year = project_birthday(birthday, today.year());
    if this_year < today {
        project_birthday(birthday, today.year() + 1)
    } else {
        this_year
    }
}

/// Whole days from `today` until the next anniversary of `birthday`.
pub fn days_until_birthday(birthday: &Birthday, today: NaiveDate) -> i64 {
    (next_anniversary(birthday, today) - today).num_days()
}

/// Congratulation date for `birthday` if its next anniversary lies within
/// `window_days` of `today` (both ends inclusive).
pub fn congratulation_date(
    birthday: &Birthday,
    today: NaiveDate,
    window_days: u32,
) -> Option<NaiveDate> {
    let anniversary = next_anniversary(birthday, today);
    let days_until = (anniversary - today).num_days();

    if (0..=i64::from(window_days)).contains(&days_until) {
        Some(adjust_for_weekend(anniversary))
    } else {
        None
    }
}
