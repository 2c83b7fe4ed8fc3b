//! Command parsing and dispatch.
//!
//! The REPL hands each input line to [`parse_input`] and the resulting
//! command word to [`dispatch`]. Dispatch is the error boundary: handler
//! failures are flattened to their display strings here, so every command
//! produces printable text and the process never dies on bad input.

pub mod handlers;

use crate::models::AddressBook;
use chrono::{Local, NaiveDate};
use tracing::debug;

/// Split an input line into a command word and its arguments.
///
/// Tokenization is plain whitespace splitting; an empty or blank line
/// yields `None`.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace().map(str::to_string);
    let command = parts.next()?;
    Some((command, parts.collect()))
}

/// Dispatch a parsed command against the book, using the local date for
/// birthday calculations.
pub fn dispatch(command: &str, args: &[String], book: &mut AddressBook) -> String {
    dispatch_at(command, args, book, Local::now().date_naive())
}

/// Dispatch with an explicit `today`, for deterministic tests.
pub fn dispatch_at(
    command: &str,
    args: &[String],
    book: &mut AddressBook,
    today: NaiveDate,
) -> String {
    debug!(command, ?args, "Dispatching command");

    let result = match command {
        "hello" => Ok("How can I help you?".to_string()),
        "add" => handlers::add_contact(args, book),
        "change" => handlers::change_phone(args, book),
        "phone" => handlers::show_phone(args, book),
        "remove-phone" => handlers::remove_phone(args, book),
        "all" => handlers::show_all_contacts(book),
        "delete" => handlers::delete_contact(args, book),
        "add-birthday" => handlers::add_birthday(args, book),
        "show-birthday" => handlers::show_birthday(args, book),
        "birthdays" => handlers::upcoming_birthdays(book, today),
        _ => Ok("Invalid command.".to_string()),
    };

    result.unwrap_or_else(|err| err.to_string())
}
