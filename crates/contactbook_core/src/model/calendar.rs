//! Calendar arithmetic for recurring birthdays.
//!
//! # Invariants
//! - Anniversaries are re-anchored by month/day only; the birth year never
//!   participates in day counts.
//! - Feb 29 falls back to Feb 28 in non-leap years.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Returns the anniversary of `birth` in `year`.
///
/// Returns `None` only when `year` is outside chrono's representable range.
pub fn anniversary_in(birth: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day()).or_else(|| {
        // Only Feb 29 can fail for a valid birth date.
        NaiveDate::from_ymd_opt(year, 2, 28)
    })
}

/// Returns the first anniversary of `birth` on or after `today`.
pub fn next_anniversary(birth: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary_in(birth, today.year())?;
    if this_year < today {
        return anniversary_in(birth, today.year() + 1);
    }
    Some(this_year)
}

/// Shifts Saturday and Sunday forward to the following Monday.
pub fn roll_weekend_to_monday(date: NaiveDate) -> NaiveDate {
    let shift = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    date.checked_add_days(Days::new(shift)).unwrap_or(date)
}

/// Whole days from `from` to `to`. Negative when `to` precedes `from`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}
