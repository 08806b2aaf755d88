//! Line-oriented read/dispatch/print loop.
//!
//! # Invariants
//! - Command failures are printed and the loop continues.
//! - Only I/O failures end the loop with an error.
//! - End of input ends the loop like `exit`.

use crate::commands::{dispatch, Outcome};
use chrono::NaiveDate;
use contactbook_core::ContactService;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{BufRead, Write};

const GREETING: &str = "Welcome to the assistant bot!";
const PROMPT: &str = "Enter a command: ";
const FAREWELL: &str = "Good bye!";

/// Shell loop failure.
#[derive(Debug)]
pub enum ShellError {
    /// Reading input or writing output failed.
    Io(std::io::Error),
}

impl Display for ShellError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "terminal I/O failed: {err}"),
        }
    }
}

impl Error for ShellError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ShellError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Runs the assistant until `exit`/`close` or end of input.
///
/// `today` is called once per command so a long session follows the clock.
pub fn run<R, W, T>(
    service: &mut ContactService,
    input: R,
    output: &mut W,
    today: T,
) -> Result<(), ShellError>
where
    R: BufRead,
    W: Write,
    T: Fn() -> NaiveDate,
{
    info!("event=shell_start module=cli status=ok");
    writeln!(output, "{GREETING}")?;

    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line.map_err(|err| {
                error!("event=shell_read module=cli status=error");
                err
            })?,
            None => {
                writeln!(output)?;
                writeln!(output, "{FAREWELL}")?;
                break;
            }
        };

        match dispatch(service, &line, today()) {
            Outcome::Reply(message) => writeln!(output, "{message}")?,
            Outcome::Exit(message) => {
                writeln!(output, "{message}")?;
                break;
            }
            Outcome::Empty => {}
        }
    }

    info!(
        "event=shell_stop module=cli status=ok contacts={}",
        service.directory().len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run;
    use chrono::NaiveDate;
    use contactbook_core::ContactService;
    use std::io::Cursor;

    fn session(script: &str) -> String {
        let mut service = ContactService::new();
        let mut output = Vec::new();
        let today = || NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        run(&mut service, Cursor::new(script), &mut output, today).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn failures_do_not_stop_the_loop() {
        let transcript = session("add Bob 12345\nadd Bob 1234567890\nall\nexit\n");
        assert_eq!(
            transcript,
            "Welcome to the assistant bot!\n\
             Enter a command: Invalid phone number `12345`: must contain exactly 10 digits.\n\
             Enter a command: Contact Bob added.\n\
             Enter a command: Contact name: Bob, phones: 1234567890\n\
             Enter a command: Good bye!\n"
        );
    }

    #[test]
    fn blank_lines_only_reprompt() {
        let transcript = session("\n   \nclose\n");
        assert_eq!(
            transcript,
            "Welcome to the assistant bot!\n\
             Enter a command: Enter a command: Enter a command: Good bye!\n"
        );
    }

    #[test]
    fn end_of_input_says_goodbye() {
        let transcript = session("hello\n");
        assert!(transcript.ends_with("Enter a command: \nGood bye!\n"));
        assert!(transcript.contains("How can I help you?"));
    }

    #[test]
    fn lines_after_exit_are_not_executed() {
        let mut service = ContactService::new();
        let mut output = Vec::new();
        let today = || NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        run(
            &mut service,
            Cursor::new("exit\nadd Bob 1234567890\n"),
            &mut output,
            today,
        )
        .unwrap();
        assert!(service.directory().is_empty());
    }
}
