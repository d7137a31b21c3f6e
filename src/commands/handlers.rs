//! Command handlers and the error translator that wraps them.

use crate::book::AddressBook;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use tracing::warn;

/// Printed when a keyed lookup misses.
pub const MISSING_CONTACT: &str = "Контакт не знайдено";

/// Printed for bad arguments: wrong count or malformed values.
pub const INVALID_FORMAT: &str = "Хибний формат, перевірте кількість аргументів";

/// Regular reply when a named contact does not exist.
pub const CONTACT_NOT_FOUND: &str = "Contact not found.";

pub const NO_CONTACTS: &str = "No contacts available.";

/// Run a handler and turn any error it returns into the message shown to the user.
///
/// This is the only place command errors are recovered.
pub fn input_error<F>(handler: F) -> String
where
    F: FnOnce() -> CommandResult<String>,
{
    match handler() {
        Ok(reply) => reply,
        Err(err) => {
            warn!(error = %err, "Command failed");
            match err {
                CommandError::MissingKey(_) => MISSING_CONTACT.to_string(),
                CommandError::Arity { .. }
                | CommandError::Validation(_)
                | CommandError::PhoneNotFound(_) => INVALID_FORMAT.to_string(),
            }
        }
    }
}

fn expect_args<'a, const N: usize>(
    command: &'static str,
    args: &[&'a str],
) -> CommandResult<[&'a str; N]> {
    <[&str; N]>::try_from(args).map_err(|_| CommandError::Arity {
        command,
        expected: N,
        got: args.len(),
    })
}

/// `add <name> <phone>`: add a phone to a contact, creating the contact if needed.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = expect_args::<2>("add", args)?;

    if book.contains(name) {
        book.record_mut(name)?.add_phone(phone)?;
    } else {
        let mut record = Record::new(name)?;
        record.add_phone(phone)?;
        book.add_record(record);
    }

    Ok(format!("Contact {} with phone {} added.", name, phone))
}

/// `change <name> <old_phone> <new_phone>`: replace one of a contact's phones.
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old_phone, new_phone] = expect_args::<3>("change", args)?;

    match book.find_mut(name) {
        Some(record) => {
            record.edit_phone(old_phone, new_phone)?;
            Ok(format!(
                "Contact {} updated phone {} to {}.",
                name, old_phone, new_phone
            ))
        }
        None => Ok(CONTACT_NOT_FOUND.to_string()),
    }
}

/// `phone <name>`: show a contact. Arguments after the name are ignored.
pub fn show_phone(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let name = args.first().ok_or(CommandError::Arity {
        command: "phone",
        expected: 1,
        got: 0,
    })?;

    Ok(book
        .find(name)
        .map(Record::to_string)
        .unwrap_or_else(|| CONTACT_NOT_FOUND.to_string()))
}

/// `all`: every contact, one per line, in insertion order.
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return NO_CONTACTS.to_string();
    }

    book.records()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
