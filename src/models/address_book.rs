//! The address book: every contact of one user, keyed by name.

use chrono::{Datelike, Duration, Local, NaiveDate};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

use super::record::Record;
use super::reminder::UpcomingBirthday;

/// How many days ahead birthday reminders look, inclusive of both ends.
pub const BIRTHDAY_WINDOW_DAYS: i64 = 7;

/// All contact records, keyed by contact name.
///
/// Iteration follows insertion order. Re-adding an existing name replaces
/// the record but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under its own name, replacing any record already there.
    ///
    /// The key is always taken from the record, so a stored record's name
    /// matches its key.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`. Missing names are ignored.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name)?;
        self.order.retain(|key| key != name);
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Contact names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    /// Contacts whose birthday falls within the next week of `today`.
    ///
    /// Each birthday is projected onto `today`'s year, or the next year if it
    /// has already passed. Those between 0 and [`BIRTHDAY_WINDOW_DAYS`] days
    /// away are kept. A greeting that lands on a Saturday or Sunday moves to
    /// the following Monday. Results follow the book's insertion order.
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();

        for record in self.iter() {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let Some(mut next) = birthday.in_year(today.year()) else {
                continue;
            };
            if next < today {
                match birthday.in_year(today.year() + 1) {
                    Some(date) => next = date,
                    None => continue,
                }
            }

            let delta_days = (next - today).num_days();
            if !(0..=BIRTHDAY_WINDOW_DAYS).contains(&delta_days) {
                continue;
            }

            let weekday = i64::from(next.weekday().num_days_from_monday());
            let greeting_day = if weekday >= 5 {
                next + Duration::days(7 - weekday)
            } else {
                next
            };

            debug!(
                name = %record.name(),
                delta_days,
                greeting_day = %greeting_day,
                "upcoming birthday"
            );
            upcoming.push(UpcomingBirthday::new(record.name().as_str(), greeting_day));
        }

        upcoming
    }

    /// [`get_upcoming_birthdays`](Self::get_upcoming_birthdays) relative to the local date.
    pub fn upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.get_upcoming_birthdays(Local::now().date_naive())
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .iter()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "{}", lines.trim_end())
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
