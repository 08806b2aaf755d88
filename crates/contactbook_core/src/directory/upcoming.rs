//! Upcoming-birthdays query.
//!
//! # Invariants
//! - A record qualifies when its next anniversary is `0..=days` away.
//! - With rollover enabled, a qualifying weekend date moves to Monday and
//!   must still be within `days` after the move.
//! - Results keep directory iteration order.

use super::Directory;
use crate::model::calendar::{days_between, next_anniversary, roll_weekend_to_monday};
use crate::model::record::Record;
use chrono::NaiveDate;
use log::debug;

/// Default proximity window in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Proximity window configuration for [`Directory::upcoming_birthdays`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
    /// Inclusive upper bound of the day count; today is day `0`.
    pub days: u32,
    /// Move Saturday/Sunday occurrences to the following Monday.
    pub weekend_rollover: bool,
}

impl BirthdayWindow {
    pub fn new(days: u32) -> Self {
        Self {
            days,
            ..Self::default()
        }
    }

    pub fn without_weekend_rollover(self) -> Self {
        Self {
            weekend_rollover: false,
            ..self
        }
    }

    /// Returns the congratulation date for `birth`, or `None` when it falls
    /// outside this window.
    pub fn congratulation_date(&self, birth: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
        let limit = i64::from(self.days);
        let next = next_anniversary(birth, today)?;
        if days_between(today, next) > limit {
            return None;
        }
        if !self.weekend_rollover {
            return Some(next);
        }
        let shifted = roll_weekend_to_monday(next);
        (days_between(today, shifted) <= limit).then_some(shifted)
    }
}

impl Default for BirthdayWindow {
    fn default() -> Self {
        Self {
            days: DEFAULT_WINDOW_DAYS,
            weekend_rollover: true,
        }
    }
}

/// One entry of the upcoming-birthdays result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpcomingBirthday<'a> {
    pub record: &'a Record,
    /// Anniversary date, moved to Monday when rollover applied.
    pub congratulation_date: NaiveDate,
}

impl Directory {
    /// Lists records whose birthday falls within `window` of `today`.
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        window: &BirthdayWindow,
    ) -> Vec<UpcomingBirthday<'_>> {
        let upcoming = self
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let congratulation_date = window.congratulation_date(birthday.date(), today)?;
                Some(UpcomingBirthday {
                    record,
                    congratulation_date,
                })
            })
            .collect::<Vec<_>>();
        debug!(
            "event=upcoming_birthdays module=directory status=ok window_days={} rollover={} hits={}",
            window.days,
            window.weekend_rollover,
            upcoming.len()
        );
        upcoming
    }
}
