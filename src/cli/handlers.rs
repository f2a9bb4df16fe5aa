//! Command handlers.
//!
//! Each handler takes the parsed arguments and the address book and returns
//! the reply to print, or a [`BookError`] whose text is the reply instead.
//! Handlers validate their input before touching the book.

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{Name, Phone};
use crate::error::{BookError, BookResult};
use crate::models::{AddressBook, Record, BIRTHDAY_WINDOW_DAYS};

fn arg(args: &[String], index: usize) -> BookResult<&str> {
    args.get(index)
        .map(String::as_str)
        .ok_or(BookError::MissingArguments)
}

fn find_record<'a>(book: &'a AddressBook, name: &str) -> BookResult<&'a Record> {
    book.find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}

fn find_record_mut<'a>(book: &'a mut AddressBook, name: &str) -> BookResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}

/// `add <name> <phone>`: create the contact if needed and append the phone.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let name = arg(args, 0)?;
    let phone = Phone::new(arg(args, 1)?)?;

    if let Some(record) = book.find_mut(name) {
        record.push_phone(phone);
        debug!(name, "phone appended to existing contact");
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::with_name(Name::new(name)?);
    record.push_phone(phone);
    book.add_record(record);
    debug!(name, "contact created");
    Ok("Contact added.".to_string())
}

/// `change <name> <old> <new>`: replace one of the contact's phones.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let name = arg(args, 0)?;
    let old = arg(args, 1)?;
    let new = arg(args, 2)?;

    find_record_mut(book, name)?.edit_phone(old, new)?;
    Ok("Phone updated.".to_string())
}

/// `phone <name>`: the contact's phones joined with `"; "`.
pub fn show_phone(args: &[String], book: &AddressBook) -> BookResult<String> {
    let name = arg(args, 0)?;
    Ok(find_record(book, name)?.phones_line())
}

/// `all`: every contact, one per line.
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        "No contacts saved.".to_string()
    } else {
        book.to_string()
    }
}

/// `add-birthday <name> <DD.MM.YYYY>`: set or replace the contact's birthday.
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let name = arg(args, 0)?;
    let birthday = arg(args, 1)?;

    find_record_mut(book, name)?.add_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`: the contact's birthday as `DD.MM.YYYY`.
pub fn show_birthday(args: &[String], book: &AddressBook) -> BookResult<String> {
    let name = arg(args, 0)?;
    book.find(name)
        .and_then(Record::birthday)
        .map(ToString::to_string)
        .ok_or_else(|| BookError::BirthdayNotFound(name.to_string()))
}

/// `birthdays`: who to congratulate in the coming week, and when.
///
/// Without `today` the local date is used.
pub fn birthdays(book: &AddressBook, today: Option<NaiveDate>) -> String {
    let upcoming = match today {
        Some(today) => book.get_upcoming_birthdays(today),
        None => book.upcoming_birthdays(),
    };
    if upcoming.is_empty() {
        return format!("No birthdays in the next {} days.", BIRTHDAY_WINDOW_DAYS);
    }

    upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `help`: the list of commands.
pub fn show_help() -> &'static str {
    "Available commands:\n\
     \x20 hello                            - Greet the bot\n\
     \x20 add <name> <phone>               - Add a new contact or phone\n\
     \x20 change <name> <old> <new>        - Change a phone number\n\
     \x20 phone <name>                     - Show phone numbers\n\
     \x20 all                              - Show all contacts\n\
     \x20 add-birthday <name> <DD.MM.YYYY> - Add birthday\n\
     \x20 show-birthday <name>             - Show birthday\n\
     \x20 birthdays                        - Show upcoming birthdays\n\
     \x20 help                             - Show this help\n\
     \x20 close / exit                     - Exit bot"
}
