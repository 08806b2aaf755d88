//! Runtime configuration for the interactive shell.
//!
//! # Responsibility
//! - Parse command-line flags and environment overrides.
//! - Resolve the effective birthday window and "today" provider.

use chrono::{Local, NaiveDate};
use clap::Parser;
use contactbook_core::{default_log_level, BirthdayWindow, LogLevel, DEFAULT_WINDOW_DAYS};
use std::path::PathBuf;

/// Interactive contact book assistant.
#[derive(Debug, Parser)]
#[command(name = "contactbook", version, about = "Interactive contact book assistant")]
pub struct Config {
    /// Log level (trace|debug|info|warn|error).
    #[arg(long, env = "CONTACTBOOK_LOG_LEVEL", value_parser = parse_log_level)]
    pub log_level: Option<LogLevel>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, env = "CONTACTBOOK_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Default window, in days, for the `birthdays` command.
    #[arg(long, env = "CONTACTBOOK_WINDOW_DAYS", default_value_t = DEFAULT_WINDOW_DAYS)]
    pub window_days: u32,

    /// Report weekend birthdays on the weekend instead of the next Monday.
    #[arg(long)]
    pub no_weekend_rollover: bool,

    /// Fixed date (YYYY-MM-DD) used as today instead of the local clock.
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

impl Config {
    pub fn log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_else(default_log_level)
    }

    pub fn birthday_window(&self) -> BirthdayWindow {
        let window = BirthdayWindow::new(self.window_days);
        if self.no_weekend_rollover {
            window.without_weekend_rollover()
        } else {
            window
        }
    }

    /// The configured date, or the local calendar date at call time.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    value.parse()
}

#[cfg(test)]
mod tests {
    use super::Config;
    use chrono::NaiveDate;
    use clap::Parser;
    use contactbook_core::{BirthdayWindow, LogLevel};

    #[test]
    fn defaults_use_seven_day_window_with_rollover() {
        let config = Config::try_parse_from(["contactbook"]).unwrap();
        assert_eq!(config.birthday_window(), BirthdayWindow::default());
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn flags_override_window_today_and_level() {
        let config = Config::try_parse_from([
            "contactbook",
            "--window-days",
            "3",
            "--no-weekend-rollover",
            "--today",
            "2024-01-01",
            "--log-level",
            "WARNING",
        ])
        .unwrap();
        assert_eq!(
            config.birthday_window(),
            BirthdayWindow::new(3).without_weekend_rollover()
        );
        assert_eq!(config.today(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(config.log_level(), LogLevel::Warn);
    }

    #[test]
    fn invalid_log_level_is_rejected() {
        assert!(Config::try_parse_from(["contactbook", "--log-level", "loud"]).is_err());
    }
}
