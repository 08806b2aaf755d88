//! Interactive contact book entry point.
//!
//! # Responsibility
//! - Parse configuration, start optional file logging, run the shell.
//! - Own the single `ContactService` for the process lifetime.

mod commands;
mod config;
mod shell;

use clap::Parser;
use config::Config;
use contactbook_core::{init_logging, ContactService, Directory};
use log::error;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = Config::parse();

    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(config.log_level(), log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let mut service = ContactService::with_directory(Directory::new(), config.birthday_window());
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    match shell::run(&mut service, stdin.lock(), &mut stdout, || config.today()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=shell_failed module=cli status=error");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
