use chrono::NaiveDate;
use contactbook_core::{validate_birthday, validate_phone, FieldError, Record, RecordError};

fn record_with(phones: &[&str]) -> Record {
    let mut record = Record::named("Bob").unwrap();
    for phone in phones {
        record.add_phone(validate_phone(phone).unwrap());
    }
    record
}

fn phone_values(record: &Record) -> Vec<&str> {
    record.phones().iter().map(|p| p.as_str()).collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn new_record_starts_empty() {
    let record = Record::named("Bob").unwrap();
    assert_eq!(record.name().as_str(), "Bob");
    assert!(record.phones().is_empty());
    assert!(record.birthday().is_none());
}

#[test]
fn named_rejects_empty_name() {
    assert_eq!(Record::named("").unwrap_err(), FieldError::InvalidName);
}

#[test]
fn duplicate_phones_are_kept() {
    let record = record_with(&["1234567890", "1234567890"]);
    assert_eq!(phone_values(&record), vec!["1234567890", "1234567890"]);
}

#[test]
fn find_phone_returns_first_match() {
    let record = record_with(&["1111111111", "2222222222"]);
    assert_eq!(
        record.find_phone("2222222222").map(|p| p.as_str()),
        Some("2222222222")
    );
    assert!(record.find_phone("3333333333").is_none());
}

#[test]
fn remove_phone_removes_only_first_duplicate() {
    let mut record = record_with(&["1111111111", "2222222222", "1111111111"]);
    let removed = record.remove_phone("1111111111").unwrap();
    assert_eq!(removed.as_str(), "1111111111");
    assert_eq!(phone_values(&record), vec!["2222222222", "1111111111"]);
}

#[test]
fn remove_missing_phone_fails() {
    let mut record = record_with(&["1111111111"]);
    let err = record.remove_phone("9999999999").unwrap_err();
    assert_eq!(err, RecordError::PhoneNotFound("9999999999".to_string()));
    assert_eq!(phone_values(&record), vec!["1111111111"]);
}

#[test]
fn update_phone_with_invalid_new_leaves_list_unchanged() {
    let mut record = record_with(&["1111111111", "2222222222"]);
    let err = record.update_phone("1111111111", "12345").unwrap_err();
    assert_eq!(
        err,
        RecordError::Field(FieldError::InvalidPhone("12345".to_string()))
    );
    assert_eq!(phone_values(&record), vec!["1111111111", "2222222222"]);
}

#[test]
fn update_phone_with_missing_old_leaves_list_unchanged() {
    let mut record = record_with(&["1111111111"]);
    let err = record.update_phone("0000000000", "2222222222").unwrap_err();
    assert_eq!(err, RecordError::PhoneNotFound("0000000000".to_string()));
    assert_eq!(phone_values(&record), vec!["1111111111"]);
}

#[test]
fn set_birthday_overwrites() {
    let mut record = Record::named("Ann").unwrap();
    record.set_birthday(validate_birthday("01.02.1990").unwrap());
    record.set_birthday(validate_birthday("03.04.1991").unwrap());
    assert_eq!(record.birthday().unwrap().to_string(), "03.04.1991");
}

#[test]
fn days_until_next_birthday_is_none_without_birthday() {
    let record = Record::named("Ann").unwrap();
    assert_eq!(record.days_until_next_birthday(date(2024, 1, 1)), None);
}

#[test]
fn days_until_next_birthday_is_zero_on_the_day() {
    let mut record = Record::named("Ann").unwrap();
    record.set_birthday(validate_birthday("15.03.1990").unwrap());
    assert_eq!(record.days_until_next_birthday(date(2024, 3, 15)), Some(0));
}

#[test]
fn days_until_next_birthday_wraps_to_next_year() {
    let mut record = Record::named("Ann").unwrap();
    record.set_birthday(validate_birthday("14.03.1990").unwrap());
    // 2024-03-15 -> 2025-03-14.
    assert_eq!(record.days_until_next_birthday(date(2024, 3, 15)), Some(364));
}

#[test]
fn leap_day_birthday_counts_to_feb_28_in_common_years() {
    let mut record = Record::named("Leap").unwrap();
    record.set_birthday(validate_birthday("29.02.2000").unwrap());
    assert_eq!(record.days_until_next_birthday(date(2023, 2, 20)), Some(8));
    assert_eq!(record.days_until_next_birthday(date(2024, 2, 20)), Some(9));
}
