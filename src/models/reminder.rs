//! Birthday reminder entries produced by the address book.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::birthday::BIRTHDAY_FORMAT;

/// A contact to congratulate, and the working day to do it on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: String,

    /// Greeting date as `DD.MM.YYYY`, already moved off weekends
    pub birthday: String,
}

impl UpcomingBirthday {
    pub fn new(name: impl Into<String>, greeting_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            birthday: greeting_date.format(BIRTHDAY_FORMAT).to_string(),
        }
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.birthday)
    }
}
