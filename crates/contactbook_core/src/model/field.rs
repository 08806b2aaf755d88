//! Validated contact fields.
//!
//! # Responsibility
//! - Validate and normalize raw name/phone/birthday strings.
//! - Provide value types that cannot hold invalid input.
//!
//! # Invariants
//! - `Name` is never empty.
//! - `Phone` is exactly 10 ASCII decimal digits.
//! - `Birthday` is a real Gregorian date rendered as `DD.MM.YYYY`.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone regex"));
static BIRTHDAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2})\.([0-9]{2})\.([0-9]{4})$").expect("valid birthday regex")
});

/// Validation failure for one contact field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Name input is empty.
    InvalidName,
    /// Phone input is not exactly 10 decimal digits.
    InvalidPhone(String),
    /// Birthday input is not `DD.MM.YYYY` or is not a real date.
    InvalidBirthday(String),
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName => write!(f, "Name cannot be empty."),
            Self::InvalidPhone(value) => write!(
                f,
                "Invalid phone number `{value}`: must contain exactly 10 digits."
            ),
            Self::InvalidBirthday(value) => {
                write!(f, "Invalid date `{value}`. Use DD.MM.YYYY.")
            }
        }
    }
}

impl Error for FieldError {}

/// Contact name. Identifies one record inside a directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Name {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(FieldError::InvalidName);
        }
        Ok(Self(value))
    }
}

impl From<Name> for String {
    fn from(value: Name) -> Self {
        value.0
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ten-digit phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !PHONE_RE.is_match(&value) {
            return Err(FieldError::InvalidPhone(value));
        }
        Ok(Self(value))
    }
}

impl From<Phone> for String {
    fn from(value: Phone) -> Self {
        value.0
    }
}

impl Display for Phone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Birth date parsed from `DD.MM.YYYY`.
///
/// Stored as a calendar date; `Display` renders the same zero-padded format
/// it was parsed from, so `validate_birthday(b.to_string()) == b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Wraps an already valid calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl TryFrom<String> for Birthday {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_birthday(&value).ok_or(FieldError::InvalidBirthday(value))
    }
}

impl From<Birthday> for String {
    fn from(value: Birthday) -> Self {
        value.to_string()
    }
}

impl Display for Birthday {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        format_date(self.0, f)
    }
}

/// Validates a contact name.
///
/// The input is not trimmed; tokenization belongs to the caller.
pub fn validate_name(value: &str) -> Result<Name, FieldError> {
    Name::try_from(value.to_string())
}

/// Validates a phone number against `^[0-9]{10}$`.
pub fn validate_phone(value: &str) -> Result<Phone, FieldError> {
    Phone::try_from(value.to_string())
}

/// Validates a `DD.MM.YYYY` birthday that denotes a real calendar date.
///
/// # Errors
/// - Pattern mismatch (`1.1.2000`, `2000-01-01`, trailing text).
/// - Impossible dates (`31.04.2000`, `30.02.2000`, `29.02.2023`).
/// - Year `0000`.
pub fn validate_birthday(value: &str) -> Result<Birthday, FieldError> {
    Birthday::try_from(value.to_string())
}

/// Renders a date as `DD.MM.YYYY`.
pub(crate) fn format_date(date: NaiveDate, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{:02}.{:02}.{:04}", date.day(), date.month(), date.year())
}

fn parse_birthday(value: &str) -> Option<Birthday> {
    let captures = BIRTHDAY_RE.captures(value)?;
    let day = captures[1].parse::<u32>().ok()?;
    let month = captures[2].parse::<u32>().ok()?;
    let year = captures[3].parse::<i32>().ok()?;
    if year < 1 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day).map(Birthday)
}
