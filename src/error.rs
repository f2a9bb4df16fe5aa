//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The `Display` text of [`BookError`] is exactly what the user sees, so handlers can
//! turn any failure into a reply with `to_string()`.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors a command handler can report back to the user.
///
/// None of these are fatal: the command loop prints them and keeps going.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A phone, birthday or name failed validation
    #[error("Value Error: {0}")]
    Validation(#[from] ValidationError),

    /// No contact is stored under the given name
    #[error("Contact '{0}' not found.")]
    ContactNotFound(String),

    /// The contact has no such phone number
    #[error("Value Error: Phone {0} not found.")]
    PhoneNotFound(String),

    /// The contact exists but has no birthday set
    #[error("No birthday found for contact '{0}'.")]
    BirthdayNotFound(String),

    /// The command was given fewer arguments than it needs
    #[error("Enter all required arguments.")]
    MissingArguments,
}

impl BookError {
    /// Whether this error refers to something that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ContactNotFound(_) | Self::PhoneNotFound(_) | Self::BirthdayNotFound(_)
        )
    }
}

/// Errors that can occur while loading or saving an address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot is not valid JSON or holds invalid field values
    #[error("Corrupted address book snapshot: {0}")]
    Corrupted(#[from] serde_json::Error),

    /// The snapshot was written by an incompatible format version
    #[error("Unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// The snapshot stores two records under the same name
    #[error("Duplicate contact '{0}' in snapshot")]
    DuplicateName(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
