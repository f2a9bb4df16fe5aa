use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting an address book between sessions.
///
/// Provides abstraction over snapshot storage, enabling different
/// implementations (JSON file, in-memory for tests).
pub trait AddressBookRepository {
    /// Read the most recent snapshot.
    ///
    /// Returns an empty book when nothing has been saved yet. Unreadable or
    /// corrupted data is an error, never an empty book.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Write `book` as the new snapshot, replacing any previous one.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
