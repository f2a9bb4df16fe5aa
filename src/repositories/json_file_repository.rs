//! JSON file snapshot storage.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, Record};
use crate::repositories::traits::AddressBookRepository;

/// Format version written into every snapshot.
pub const SNAPSHOT_VERSION: u32 = 1;

/// On-disk form of an address book.
///
/// ```json
/// { "version": 1, "records": [ { "name": "Ann", "phones": ["0501234567"], "birthday": "12.03.1990" } ] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    pub version: u32,
    pub records: Vec<Record>,
}

impl Snapshot {
    /// Capture `book` with records in insertion order.
    pub fn from_book(book: &AddressBook) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            records: book.iter().cloned().collect(),
        }
    }

    /// Rebuild the address book, rejecting unknown versions and duplicate names.
    pub fn into_book(self) -> StorageResult<AddressBook> {
        if self.version != SNAPSHOT_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: self.version,
                expected: SNAPSHOT_VERSION,
            });
        }

        let mut seen = HashSet::new();
        let mut book = AddressBook::new();
        for record in self.records {
            if !seen.insert(record.name().as_str().to_string()) {
                return Err(StorageError::DuplicateName(
                    record.name().as_str().to_string(),
                ));
            }
            book.add_record(record);
        }
        Ok(book)
    }
}

/// Address book repository backed by a single JSON file.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository that reads and writes `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    // Sibling of the target so the final rename stays on one filesystem.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl AddressBookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No address book at {}, starting empty", self.path.display());
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(self.io_error(&self.path, e)),
        };

        let snapshot: Snapshot = serde_json::from_str(&contents)?;
        let book = snapshot.into_book()?;
        info!(
            "Loaded {} contacts from {}",
            book.len(),
            self.path.display()
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(&Snapshot::from_book(book))?;

        let temp = self.temp_path();
        fs::write(&temp, json).map_err(|e| self.io_error(&temp, e))?;
        debug!("Wrote snapshot to {}", temp.display());

        fs::rename(&temp, &self.path).map_err(|e| self.io_error(&self.path, e))?;
        info!("Saved {} contacts to {}", book.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> AddressBook {
        let mut ann = Record::new("Ann").unwrap();
        ann.add_phone("0501234567").unwrap();
        ann.add_birthday("12.03.1990").unwrap();
        let bob = Record::new("Bob").unwrap();
        vec![ann, bob].into_iter().collect()
    }

    #[test]
    fn test_snapshot_round_trip() {
        let book = sample_book();
        let snapshot = Snapshot::from_book(&book);
        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert_eq!(snapshot.records.len(), 2);
        assert_eq!(snapshot.into_book().unwrap(), book);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let json = serde_json::to_value(Snapshot::from_book(&sample_book())).unwrap();
        assert_eq!(json["version"], 1);
        assert_eq!(json["records"][0]["name"], "Ann");
        assert_eq!(json["records"][0]["phones"][0], "0501234567");
        assert_eq!(json["records"][0]["birthday"], "12.03.1990");
        assert!(json["records"][1]["birthday"].is_null());
    }

    #[test]
    fn test_snapshot_rejects_unknown_version() {
        let snapshot = Snapshot {
            version: 2,
            records: Vec::new(),
        };
        assert!(matches!(
            snapshot.into_book(),
            Err(StorageError::UnsupportedVersion { found: 2, .. })
        ));
    }

    #[test]
    fn test_snapshot_rejects_duplicate_names() {
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            records: vec![Record::new("Ann").unwrap(), Record::new("Ann").unwrap()],
        };
        assert!(matches!(
            snapshot.into_book(),
            Err(StorageError::DuplicateName(name)) if name == "Ann"
        ));
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let repo = JsonFileRepository::new("/data/book.json");
        assert_eq!(repo.temp_path(), PathBuf::from("/data/book.json.tmp"));
    }
}
