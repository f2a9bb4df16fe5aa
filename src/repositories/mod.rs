//! Persistence for the address book.
//!
//! The book is always loaded and saved as a whole; there are no partial
//! writes and no per-record storage.

pub mod json_file_repository;
pub mod traits;

pub use json_file_repository::{JsonFileRepository, Snapshot, SNAPSHOT_VERSION};
pub use traits::AddressBookRepository;
