//! The interactive command loop.

use crate::commands::{dispatch, parse_input};
use crate::models::AddressBook;
use crate::storage::JsonFileStore;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::info;

/// Run the REPL until `close`/`exit` or end of input, then persist the book.
///
/// All command failures are printed and the loop continues; the only errors
/// that escape are terminal I/O failures and a failed final save.
pub fn run(book: &mut AddressBook, store: &JsonFileStore) -> Result<()> {
    let stdin = std::io::stdin();
    run_with(book, store, &mut stdin.lock(), &mut std::io::stdout())
}

/// REPL loop over explicit reader/writer, for tests.
pub fn run_with(
    book: &mut AddressBook,
    store: &JsonFileStore,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    writeln!(output, "Welcome to the assistant bot!")?;

    let mut line = String::new();
    loop {
        write!(output, "Enter a command: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // EOF counts as exit so the book still gets saved
            break;
        }

        let Some((command, args)) = parse_input(&line) else {
            continue;
        };

        if matches!(command.as_str(), "close" | "exit") {
            break;
        }

        writeln!(output, "{}", dispatch(&command, &args, book))?;
    }

    store.save(book).context("Failed to save address book")?;
    info!(contacts = book.len(), "Address book saved on exit");
    writeln!(output, "Good bye!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_session(input: &str) -> (AddressBook, String) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("addressbook.json"));
        let mut book = AddressBook::new();
        let mut output = Vec::new();

        run_with(&mut book, &store, &mut input.as_bytes(), &mut output).unwrap();

        let book = store.load().unwrap();
        (book, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_session_adds_and_saves_contact() {
        let (book, output) = run_session("add John 1234567890\nexit\n");

        assert!(book.find("John").is_some());
        assert!(output.contains("Welcome to the assistant bot!"));
        assert!(output.contains("Contact added."));
        assert!(output.contains("Good bye!"));
    }

    #[test]
    fn test_session_survives_bad_input() {
        let (book, output) = run_session("add John 123\n\nbogus\nclose\n");

        assert!(book.find("John").is_some()); // record created despite bad phone
        assert!(output.contains("Invalid phone number 123"));
        assert!(output.contains("Invalid command."));
        assert!(output.contains("Good bye!"));
    }

    #[test]
    fn test_session_saves_on_eof() {
        let (book, output) = run_session("add John 1234567890\n");

        assert!(book.find("John").is_some());
        assert!(output.contains("Good bye!"));
    }
}
