//! Command handlers.
//!
//! Each handler takes the tokenized arguments plus the address book and
//! produces the text the REPL prints. Errors are ordinary values here; the
//! dispatcher flattens them to their display strings, so a bad phone number
//! or a duplicate birthday is a message, never a crash.

use crate::domain::Birthday;
use crate::error::CommandError;
use crate::models::{AddressBook, ContactRecord};
use chrono::NaiveDate;

type HandlerResult = Result<String, CommandError>;

/// `add <name> <phone>` — create the contact if needed and append the phone.
///
/// The record is created before the phone is validated, matching the
/// long-standing behavior that `add John badphone` still creates John.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> HandlerResult {
    let [name, phone] = two_args(args, "add <name> <phone>")?;

    let message = if book.find(name).is_some() {
        "Contact updated."
    } else {
        book.add_record(ContactRecord::new(name));
        "Contact added."
    };

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
    }
    Ok(message.to_string())
}

/// `change <name> <old> <new>` — replace one of the contact's phones.
pub fn change_phone(args: &[String], book: &mut AddressBook) -> HandlerResult {
    let [name, old, new] = three_args(args, "change <name> <old-phone> <new-phone>")?;

    let Some(record) = book.find_mut(name) else {
        return Ok(format!("Contact {name} not found."));
    };

    record.edit_phone(old, new)?;
    Ok(format!(
        "Phone number for {name} changed from {old} to {new}."
    ))
}

/// `phone <name>` — list the contact's phone numbers.
pub fn show_phone(args: &[String], book: &AddressBook) -> HandlerResult {
    let [name] = one_arg(args, "phone <name>")?;

    let Some(record) = book.find(name) else {
        return Ok(format!("Contact {name} not found."));
    };

    let phones = record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("{name}'s phone numbers: {phones}"))
}

/// `remove-phone <name> <phone>` — drop a phone from the contact.
///
/// A missing phone is reported informationally, not as a failure.
pub fn remove_phone(args: &[String], book: &mut AddressBook) -> HandlerResult {
    let [name, phone] = two_args(args, "remove-phone <name> <phone>")?;

    let Some(record) = book.find_mut(name) else {
        return Ok(format!("Contact {name} not found."));
    };

    if record.remove_phone(phone) {
        Ok(format!("Phone number {phone} removed from {name}."))
    } else {
        Ok(format!("Phone number {phone} not found"))
    }
}

/// `all` — every contact, one per line.
pub fn show_all_contacts(book: &AddressBook) -> HandlerResult {
    if book.is_empty() {
        return Ok("No contacts found.".to_string());
    }

    let mut result = String::from("All contacts:");
    for record in book.iter() {
        result.push('\n');
        result.push_str(&record.to_string());
    }
    Ok(result)
}

/// `delete <name>` — remove the whole contact.
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> HandlerResult {
    let [name] = one_arg(args, "delete <name>")?;

    if book.delete(name) {
        Ok(format!("Contact {name} deleted."))
    } else {
        Ok(format!("Contact {name} not found."))
    }
}

/// `add-birthday <name> <DD.MM.YYYY>` — set the contact's birthday.
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> HandlerResult {
    let [name, text] = two_args(args, "add-birthday <name> <DD.MM.YYYY>")?;

    let Some(record) = book.find_mut(name) else {
        return Ok(format!("Contact {name} not found."));
    };

    let birthday = Birthday::new(text.as_str())?;
    record.add_birthday(birthday)?;
    Ok(format!("Birthday for {name} added as {text}."))
}

/// `show-birthday <name>` — print the contact's birthday.
pub fn show_birthday(args: &[String], book: &AddressBook) -> HandlerResult {
    let [name] = one_arg(args, "show-birthday <name>")?;

    let Some(record) = book.find(name) else {
        return Ok(format!("Contact {name} not found."));
    };

    match record.birthday() {
        Some(birthday) => Ok(format!("Birthday for {name} is {birthday}.")),
        None => Ok(format!("Birthday for {name} is not set.")),
    }
}

/// `birthdays` — contacts to congratulate within the next seven days.
pub fn upcoming_birthdays(book: &AddressBook, today: NaiveDate) -> HandlerResult {
    let upcoming = book.get_upcoming_birthdays(today);
    if upcoming.is_empty() {
        return Ok("No birthdays in the next week.".to_string());
    }

    let mut result = String::from("Upcoming birthdays:");
    for entry in upcoming {
        result.push('\n');
        result.push_str(&format!("{}: {}", entry.name, entry.congratulation_text()));
    }
    Ok(result)
}

fn one_arg<'a>(args: &'a [String], usage: &'static str) -> Result<[&'a String; 1], CommandError> {
    match args {
        [a, ..] => Ok([a]),
        _ => Err(CommandError::Usage(usage)),
    }
}

fn two_args<'a>(args: &'a [String], usage: &'static str) -> Result<[&'a String; 2], CommandError> {
    match args {
        [a, b, ..] => Ok([a, b]),
        _ => Err(CommandError::Usage(usage)),
    }
}

fn three_args<'a>(
    args: &'a [String],
    usage: &'static str,
) -> Result<[&'a String; 3], CommandError> {
    match args {
        [a, b, c, ..] => Ok([a, b, c]),
        _ => Err(CommandError::Usage(usage)),
    }
}
