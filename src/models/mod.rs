//! Data models for the address book.
//!
//! This module contains the contact record, the address book that owns the
//! records, and the birthday reminder entries the book computes.

pub mod address_book;
pub mod record;
pub mod reminder;

pub use address_book::{AddressBook, BIRTHDAY_WINDOW_DAYS};
pub use record::Record;
pub use reminder::UpcomingBirthday;
