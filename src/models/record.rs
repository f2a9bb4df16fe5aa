//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, its phone numbers in insertion order, and an optional birthday.
///
/// Phone numbers are not deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with a name and nothing else.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::with_name(Name::new(name)?))
    }

    /// Create a record from an already validated name.
    pub fn with_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it to the phone list.
    pub fn add_phone(&mut self, raw: &str) -> BookResult<()> {
        let phone = Phone::new(raw)?;
        self.push_phone(phone);
        Ok(())
    }

    /// Append a phone that has already been validated.
    pub fn push_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Remove the first phone equal to `raw`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` and leaves the list untouched if
    /// no phone matches.
    pub fn remove_phone(&mut self, raw: &str) -> BookResult<Phone> {
        let index = self
            .phones
            .iter()
            .position(|phone| phone == raw)
            .ok_or_else(|| BookError::PhoneNotFound(raw.to_string()))?;
        Ok(self.phones.remove(index))
    }

    /// Replace `old` with `new`.
    ///
    /// `new` is validated before anything is removed, so a failed edit never
    /// changes the record. The new number goes to the end of the list.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let replacement = Phone::new(new)?;
        self.remove_phone(old)?;
        self.push_phone(replacement);
        Ok(())
    }

    /// First phone equal to `raw`, if any.
    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| *phone == raw)
    }

    /// Validate `raw` and set it as the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, raw: &str) -> BookResult<()> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    /// Phones joined with `"; "`.
    pub fn phones_line(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: {}", self.name, self.phones_line())?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
