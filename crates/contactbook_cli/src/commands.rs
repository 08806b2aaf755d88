//! Command-name dispatch for the interactive shell.
//!
//! # Responsibility
//! - Split one input line into a command word and arguments.
//! - Check argument arity and route to `ContactService`.
//!
//! # Invariants
//! - Command words are matched case-insensitively; arguments are passed
//!   through unchanged.
//! - Extra arguments beyond a command's arity are ignored.

use chrono::NaiveDate;
use contactbook_core::{CommandError, CommandResult, ContactService};
use log::debug;

/// Result of dispatching one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the message and keep reading.
    Reply(String),
    /// Print the message and stop the loop.
    Exit(String),
    /// Blank input; nothing to print.
    Empty,
}

/// Splits `line` on whitespace into `(command, args)`.
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    Some((command, tokens.collect()))
}

/// Executes one input line against `service`.
///
/// Command failures are rendered into the reply; they never end the loop.
pub fn dispatch(service: &mut ContactService, line: &str, today: NaiveDate) -> Outcome {
    let Some((command, args)) = parse_input(line) else {
        return Outcome::Empty;
    };

    let reply = match command.as_str() {
        "close" | "exit" => return Outcome::Exit("Good bye!".to_string()),
        "hello" => Ok("How can I help you?".to_string()),
        "add" => require::<2>(&command, &args, "add <name> <phone>")
            .and_then(|[name, phone]| service.add_contact(name, phone)),
        "change" => require::<3>(&command, &args, "change <name> <old phone> <new phone>")
            .and_then(|[name, old, new]| service.change_phone(name, old, new)),
        "phone" => require::<1>(&command, &args, "phone <name>")
            .and_then(|[name]| service.show_phones(name)),
        "all" => Ok(service.list_all()),
        "add-birthday" | "birthday" => {
            require::<2>(&command, &args, "add-birthday <name> <DD.MM.YYYY>")
                .and_then(|[name, date]| service.add_birthday(name, date))
        }
        "show-birthday" => require::<1>(&command, &args, "show-birthday <name>")
            .and_then(|[name]| service.show_birthday(name)),
        "birthdays" => parse_window(&args).map(|days| service.birthdays(today, days)),
        _ => return Outcome::Reply("Invalid command.".to_string()),
    };

    match reply {
        Ok(message) => Outcome::Reply(message),
        Err(err) => {
            debug!("event=command_failed module=cli status=error command={command}");
            Outcome::Reply(err.to_string())
        }
    }
}

fn require<'a, const N: usize>(
    command: &str,
    args: &[&'a str],
    usage: &'static str,
) -> CommandResult<[&'a str; N]> {
    args.get(..N)
        .and_then(|head| <[&'a str; N]>::try_from(head).ok())
        .ok_or_else(|| CommandError::MissingArgument {
            command: command.to_string(),
            usage,
        })
}

fn parse_window(args: &[&str]) -> CommandResult<Option<u32>> {
    match args.first() {
        None => Ok(None),
        Some(value) => value
            .parse::<u32>()
            .map(Some)
            .map_err(|_| CommandError::InvalidArgument {
                command: "birthdays".to_string(),
                usage: "birthdays [days]",
            }),
    }
}
