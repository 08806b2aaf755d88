//! Core domain logic for the contact book.
//! This crate is the single source of truth for contact invariants.

pub mod directory;
pub mod logging;
pub mod model;
pub mod service;

pub use directory::{BirthdayWindow, Directory, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::field::{
    validate_birthday, validate_name, validate_phone, Birthday, FieldError, Name, Phone,
};
pub use model::record::{Record, RecordError, RecordResult};
pub use service::contact_service::{CommandError, CommandResult, ContactService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
