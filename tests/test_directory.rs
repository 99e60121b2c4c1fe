//! Integration tests for directory queries and pagination.

mod fixtures;

use address_book::{ContactRecord, Directory, RecordError};
use chrono::NaiveDate;
use fixtures::*;

#[test]
fn test_chunked_iteration_in_insertion_order() {
    let directory = directory_of(&["A", "B", "C", "D", "E"]);

    let chunks: Vec<Vec<String>> = directory
        .iter_chunks(2)
        .unwrap()
        .map(|chunk| names_of(&chunk))
        .collect();

    assert_eq!(chunks, vec![vec!["A", "B"], vec!["C", "D"], vec!["E"]]);
}

#[test]
fn test_chunks_cover_every_record_once() {
    let names: Vec<String> = (0..23).map(|i| format!("Contact {i:02}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let directory = directory_of(&refs);

    for size in 1..=25 {
        let chunks: Vec<Vec<&ContactRecord>> = directory.iter_chunks(size).unwrap().collect();
        assert!(chunks.iter().all(|c| !c.is_empty() && c.len() <= size));
        assert!(chunks[..chunks.len() - 1].iter().all(|c| c.len() == size));

        let flat: Vec<&str> = chunks
            .iter()
            .flatten()
            .map(|r| r.name().as_str())
            .collect();
        assert_eq!(flat, refs);
    }
}

#[test]
fn test_search_by_phone_prefix() {
    let mut directory = Directory::new();
    directory.add_record(sample_record("First", None, &["5551234567"]));
    directory.add_record(sample_record("Second", None, &["5559876543"]));
    directory.add_record(sample_record("Third", None, &["1112223333"]));

    assert_eq!(names_of(&directory.search("55")), vec!["First", "Second"]);
}

#[test]
fn test_search_matches_name_or_phone() {
    let directory = sample_directory();

    assert_eq!(names_of(&directory.search("jAnE")), vec!["Jane Smith"]);
    assert_eq!(names_of(&directory.search("333")), vec!["Jane Smith", "Bob Brown"]);
    assert!(directory.search("nobody").is_empty());
}

#[test]
fn test_delete_nonexistent_is_silent() {
    let mut directory = sample_directory();
    let before: Vec<String> = directory.names().map(String::from).collect();

    assert!(directory.delete("nonexistent").is_none());

    let after: Vec<String> = directory.names().map(String::from).collect();
    assert_eq!(before, after);
}

#[test]
fn test_add_record_replaces_without_merging() {
    let mut directory = sample_directory();
    directory.add_record(sample_record("John Doe", None, &["9990001111"]));

    let john = directory.find("John Doe").unwrap();
    assert_eq!(john.phones().len(), 1);
    assert!(john.birthday().is_none());
    assert_eq!(directory.len(), 3);
}

#[test]
fn test_edit_phone_through_directory() {
    let mut directory = sample_directory();

    let jane = directory.find_mut("Jane Smith").unwrap();
    jane.edit_phone("5559876543", "7778889999").unwrap();
    assert_eq!(
        jane.edit_phone("5559876543", "7778889999"),
        Err(RecordError::PhoneNotFound)
    );

    assert!(directory.search("555987").is_empty());
    assert_eq!(names_of(&directory.search("777")), vec!["Jane Smith"]);
}

#[test]
fn test_add_then_remove_phone_restores_list() {
    let mut record = sample_record("John", None, &["5551234567", "1112223333"]);
    let before = record.phones().to_vec();

    record.add_phone("4445556666").unwrap();
    record.remove_phone("4445556666").unwrap();

    assert_eq!(record.phones(), before.as_slice());
}

#[test]
fn test_upcoming_birthdays_across_year_end() {
    let mut directory = Directory::new();
    directory.add_record(sample_record("NewYear", Some("1990-01-02"), &[]));
    directory.add_record(sample_record("Eve", Some("1990-12-31"), &[]));
    directory.add_record(sample_record("Summer", Some("1990-07-01"), &[]));

    let today = NaiveDate::from_ymd_opt(2023, 12, 30).unwrap();
    let upcoming: Vec<(String, i64)> = directory
        .upcoming_birthdays(today, 5)
        .into_iter()
        .map(|(r, d)| (r.name().to_string(), d))
        .collect();

    assert_eq!(
        upcoming,
        vec![("Eve".to_string(), 1), ("NewYear".to_string(), 3)]
    );
}
