//! Contact use-case service.
//!
//! # Responsibility
//! - Expose one entry point per user command over an owned `Directory`.
//! - Turn outcomes into display strings or typed `CommandError`s.
//!
//! # Invariants
//! - Every input is validated before the directory is touched, so a failed
//!   command never creates or alters a contact.
//! - Existing contacts are extended in place, never replaced.
//! - No stdin/stdout I/O happens here.

use crate::directory::{BirthdayWindow, Directory};
use crate::model::field::{validate_birthday, validate_name, validate_phone, FieldError};
use crate::model::record::{Record, RecordError};
use chrono::NaiveDate;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CommandResult<T> = Result<T, CommandError>;

/// Failure of one contact command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Malformed name/phone/birthday input.
    Field(FieldError),
    /// No contact with this exact name.
    ContactNotFound(String),
    /// The contact has no phone with this exact value.
    PhoneNotFound(String),
    /// The caller supplied too few arguments.
    MissingArgument {
        command: String,
        usage: &'static str,
    },
    /// An argument is present but cannot be parsed for this command.
    InvalidArgument {
        command: String,
        usage: &'static str,
    },
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(err) => write!(f, "{err}"),
            Self::ContactNotFound(name) => write!(f, "Contact {name} not found."),
            Self::PhoneNotFound(value) => write!(f, "Phone number {value} not found."),
            Self::MissingArgument { command, usage } => {
                write!(f, "Not enough arguments for `{command}`. Usage: {usage}")
            }
            Self::InvalidArgument { command, usage } => {
                write!(f, "Invalid argument for `{command}`. Usage: {usage}")
            }
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FieldError> for CommandError {
    fn from(value: FieldError) -> Self {
        Self::Field(value)
    }
}

impl From<RecordError> for CommandError {
    fn from(value: RecordError) -> Self {
        match value {
            RecordError::Field(err) => Self::Field(err),
            RecordError::PhoneNotFound(phone) => Self::PhoneNotFound(phone),
        }
    }
}

/// Command facade over one process-wide directory.
#[derive(Debug, Clone, Default)]
pub struct ContactService {
    directory: Directory,
    window: BirthdayWindow,
}

impl ContactService {
    /// Creates a service over an empty directory with the default window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service with a caller-provided directory and window.
    pub fn with_directory(directory: Directory, window: BirthdayWindow) -> Self {
        Self { directory, window }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn window(&self) -> BirthdayWindow {
        self.window
    }

    /// Adds `phone` to `name`, creating the contact when it does not exist.
    ///
    /// # Contract
    /// - Name and phone are validated first; an invalid phone never creates
    ///   the contact.
    pub fn add_contact(&mut self, name: &str, phone: &str) -> CommandResult<String> {
        let name = validate_name(name)?;
        let phone = validate_phone(phone)?;
        let display_name = name.to_string();

        let (record, created) = self.directory.get_or_insert(name);
        record.add_phone(phone);
        info!(
            "event=contact_add module=service status=ok created={} phones={}",
            created,
            record.phones().len()
        );

        if created {
            Ok(format!("Contact {display_name} added."))
        } else {
            Ok(format!("Contact {display_name} updated."))
        }
    }

    /// Replaces phone `old` with `new` on an existing contact.
    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> CommandResult<String> {
        let record = self
            .directory
            .find_mut(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
        record.update_phone(old, new)?;
        info!("event=contact_change_phone module=service status=ok");
        Ok(format!("Phone number for {name} updated."))
    }

    /// Sets or overwrites the birthday of an existing contact.
    pub fn add_birthday(&mut self, name: &str, date: &str) -> CommandResult<String> {
        let birthday = validate_birthday(date)?;
        let record = self
            .directory
            .find_mut(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
        let replaced = record.birthday().is_some();
        record.set_birthday(birthday);
        info!(
            "event=contact_add_birthday module=service status=ok replaced={}",
            replaced
        );
        Ok(format!("Birthday for {name} added."))
    }

    /// Lists the phones of one contact.
    pub fn show_phones(&self, name: &str) -> CommandResult<String> {
        let record = self.find(name)?;
        let phones = record
            .phones()
            .iter()
            .map(|phone| phone.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        Ok(format!("Phone(s) for {name}: {phones}"))
    }

    /// Shows the birthday of one contact.
    pub fn show_birthday(&self, name: &str) -> CommandResult<String> {
        let record = self.find(name)?;
        match record.birthday() {
            Some(birthday) => Ok(format!("Birthday for {name}: {birthday}")),
            None => Ok(format!("No birthday set for {name}.")),
        }
    }

    /// Renders every contact, one per line.
    pub fn list_all(&self) -> String {
        if self.directory.is_empty() {
            return "No contacts found.".to_string();
        }
        self.directory.to_string()
    }

    /// Returns `(name, congratulation date)` pairs for birthdays within
    /// `window_days` of `today`, or within the configured window when `None`.
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        window_days: Option<u32>,
    ) -> Vec<(String, NaiveDate)> {
        let window = self.effective_window(window_days);
        self.directory
            .upcoming_birthdays(today, &window)
            .into_iter()
            .map(|hit| (hit.record.name().to_string(), hit.congratulation_date))
            .collect()
    }

    /// Renders [`ContactService::upcoming_birthdays`] for display.
    pub fn birthdays(&self, today: NaiveDate, window_days: Option<u32>) -> String {
        let window = self.effective_window(window_days);
        let upcoming = self.upcoming_birthdays(today, Some(window.days));
        debug!(
            "event=birthdays_render module=service status=ok hits={}",
            upcoming.len()
        );
        if upcoming.is_empty() {
            return format!("No birthdays in the next {} days.", window.days);
        }
        upcoming
            .iter()
            .map(|(name, date)| format!("{name}: {}", date.format("%d.%m.%Y")))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn effective_window(&self, window_days: Option<u32>) -> BirthdayWindow {
        match window_days {
            Some(days) => BirthdayWindow {
                days,
                ..self.window
            },
            None => self.window,
        }
    }

    fn find(&self, name: &str) -> CommandResult<&Record> {
        self.directory
            .find(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
    }
}
