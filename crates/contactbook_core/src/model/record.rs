//! Contact record aggregate.
//!
//! # Responsibility
//! - Own one contact's validated name, phone list and optional birthday.
//! - Apply phone/birthday mutations without ever storing invalid values.
//!
//! # Invariants
//! - `name` never changes after construction.
//! - Phones keep insertion order and are not deduplicated.
//! - A failed mutation leaves the record untouched.

use crate::model::calendar::{days_between, next_anniversary};
use crate::model::field::{validate_name, validate_phone, Birthday, FieldError, Name, Phone};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RecordResult<T> = Result<T, RecordError>;

/// Record mutation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Input failed field validation before any mutation.
    Field(FieldError),
    /// No phone with this exact value exists in the record.
    PhoneNotFound(String),
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(err) => write!(f, "{err}"),
            Self::PhoneNotFound(value) => write!(f, "Phone number {value} not found."),
        }
    }
}

impl Error for RecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field(err) => Some(err),
            Self::PhoneNotFound(_) => None,
        }
    }
}

impl From<FieldError> for RecordError {
    fn from(value: FieldError) -> Self {
        Self::Field(value)
    }
}

/// One contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Creates an empty record (no phones, no birthday).
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Validates `name` and creates an empty record.
    pub fn named(name: &str) -> Result<Self, FieldError> {
        Ok(Self::new(validate_name(name)?))
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Appends a phone. Duplicates are kept.
    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Returns the first phone whose raw value equals `value`.
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == value)
    }

    /// Removes and returns the first phone equal to `value`.
    pub fn remove_phone(&mut self, value: &str) -> RecordResult<Phone> {
        let index = self.phone_index(value)?;
        Ok(self.phones.remove(index))
    }

    /// Replaces `old` with `new`.
    ///
    /// # Contract
    /// - `new` is validated before anything is touched.
    /// - The old entry is removed and the new one appended, so the edited
    ///   phone moves to the end of the list.
    ///
    /// # Errors
    /// - `RecordError::Field(InvalidPhone)` when `new` is malformed.
    /// - `RecordError::PhoneNotFound` when `old` is absent.
    pub fn update_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        let replacement = validate_phone(new)?;
        let index = self.phone_index(old)?;
        self.phones.remove(index);
        self.phones.push(replacement);
        Ok(())
    }

    /// Sets or overwrites the birthday.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Days from `today` to the next birthday, `0` when it is today.
    ///
    /// Returns `None` when no birthday is set.
    pub fn days_until_next_birthday(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday?;
        let next = next_anniversary(birthday.date(), today)?;
        Some(days_between(today, next))
    }

    fn phone_index(&self, value: &str) -> RecordResult<usize> {
        self.phones
            .iter()
            .position(|phone| phone.as_str() == value)
            .ok_or_else(|| RecordError::PhoneNotFound(value.to_string()))
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {phones}", self.name)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {birthday}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Record, RecordError};
    use crate::model::field::{validate_birthday, validate_phone, FieldError};

    #[test]
    fn update_phone_moves_edited_entry_to_end() {
        let mut record = Record::named("Bob").unwrap();
        record.add_phone(validate_phone("1111111111").unwrap());
        record.add_phone(validate_phone("2222222222").unwrap());

        record.update_phone("1111111111", "3333333333").unwrap();

        let phones: Vec<_> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["2222222222", "3333333333"]);
    }

    #[test]
    fn update_phone_validates_new_before_looking_up_old() {
        let mut record = Record::named("Bob").unwrap();
        let err = record.update_phone("0000000000", "bad").unwrap_err();
        assert_eq!(
            err,
            RecordError::Field(FieldError::InvalidPhone("bad".to_string()))
        );
    }

    #[test]
    fn display_lists_phones_and_birthday() {
        let mut record = Record::named("Ann").unwrap();
        assert_eq!(record.to_string(), "Contact name: Ann, phones: ");

        record.add_phone(validate_phone("1234567890").unwrap());
        record.add_phone(validate_phone("0987654321").unwrap());
        record.set_birthday(validate_birthday("06.01.1990").unwrap());
        assert_eq!(
            record.to_string(),
            "Contact name: Ann, phones: 1234567890; 0987654321, birthday: 06.01.1990"
        );
    }
}
