use contact_assistant::error::{StorageError, StorageResult};
use contact_assistant::models::AddressBook;
use contact_assistant::repositories::AddressBookRepository;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock address book repository for testing.
///
/// Keeps the last saved book in memory, can be told to fail saves, and
/// tracks method calls for verification. Clones share state, so a test can
/// keep a handle after giving one to an `Assistant`.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockAddressBookRepository {
    saved: Arc<Mutex<Option<AddressBook>>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockAddressBookRepository {
    /// Create a new empty MockAddressBookRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository whose next load returns `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let repo = Self::new();
        *repo.saved.lock().unwrap() = Some(book);
        repo
    }

    /// Make every subsequent save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// The most recently saved book, if any.
    pub fn saved_book(&self) -> Option<AddressBook> {
        self.saved.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl AddressBookRepository for MockAddressBookRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");
        Ok(self.saved_book().unwrap_or_default())
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io {
                path: PathBuf::from("mock"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            });
        }

        *self.saved.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}
