//! Birthday reminder scenarios against the public `AddressBook` API.

use chrono::NaiveDate;
use contact_assistant::{AddressBook, Record, UpcomingBirthday};

fn date(day: u32, month: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn book(entries: &[(&str, Option<&str>)]) -> AddressBook {
    entries
        .iter()
        .map(|(name, birthday)| {
            let mut record = Record::new(*name).unwrap();
            if let Some(birthday) = birthday {
                record.add_birthday(birthday).unwrap();
            }
            record
        })
        .collect()
}

#[test]
fn test_weekday_birthday_is_kept() {
    let book = book(&[("Ann", Some("12.03.1990"))]);
    assert_eq!(
        book.get_upcoming_birthdays(date(10, 3, 2024)),
        vec![UpcomingBirthday {
            name: "Ann".to_string(),
            birthday: "12.03.2024".to_string(),
        }]
    );
}

#[test]
fn test_weekend_birthday_moves_to_monday() {
    let book = book(&[("Bob", Some("16.03.1985")), ("Sue", Some("17.03.1985"))]);
    let upcoming = book.get_upcoming_birthdays(date(10, 3, 2024));
    let dates: Vec<_> = upcoming.iter().map(|u| u.birthday.as_str()).collect();
    assert_eq!(dates, vec!["18.03.2024", "18.03.2024"]);
}

#[test]
fn test_birthday_after_new_year() {
    let book = book(&[("Eve", Some("02.01.1970"))]);
    let upcoming = book.get_upcoming_birthdays(date(30, 12, 2024));
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].birthday, "02.01.2025");
}

#[test]
fn test_mixed_book() {
    let book = book(&[
        ("NoBirthday", None),
        ("Passed", Some("01.03.1990")),
        ("Far", Some("25.03.1990")),
        ("Today", Some("11.03.1990")),
    ]);
    // Monday
    let upcoming = book.get_upcoming_birthdays(date(11, 3, 2024));
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name, "Today");
    assert_eq!(upcoming[0].birthday, "11.03.2024");
}

#[test]
fn test_weekend_shift_can_leave_the_window() {
    // Saturday 16.03 is seven days after Saturday 09.03; the greeting moves to 18.03.
    let book = book(&[("Edge", Some("16.03.2001"))]);
    let upcoming = book.get_upcoming_birthdays(date(9, 3, 2024));
    assert_eq!(upcoming[0].birthday, "18.03.2024");
}

#[test]
fn test_find_and_delete_missing_names() {
    let mut book = book(&[("Ann", None)]);
    assert!(book.find("nonexistent").is_none());
    book.delete("nonexistent");
    assert_eq!(book.len(), 1);
}
