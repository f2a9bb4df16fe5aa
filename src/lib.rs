//! Contact Assistant - a command-line address book with birthday reminders.
//!
//! This library keeps contacts (a name, phone numbers and an optional
//! birthday), persists them between sessions, and works out whose birthday
//! to celebrate in the coming week.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for names, phones and birthdays
//! - **models**: Contact records and the address book
//! - **repositories**: Whole-book persistence as a versioned JSON snapshot
//! - **cli**: Input parsing, command handlers and the interactive loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use cli::{run_assistant, run_session, Assistant, Command, Reply};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{BookError, ConfigError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use repositories::{AddressBookRepository, JsonFileRepository};
