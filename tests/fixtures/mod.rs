//! Test fixtures and sample data for integration tests.
//!
//! This module provides reusable records and directories.

use address_book::{ContactRecord, Directory};

/// Create a record with a name, optional birthday and phones.
pub fn sample_record(name: &str, birthday: Option<&str>, phones: &[&str]) -> ContactRecord {
    let mut record = ContactRecord::new(name, birthday).unwrap();
    for phone in phones {
        record.add_phone(phone).unwrap();
    }
    record
}

/// Create a directory holding one phone-less record per name, in order.
#[allow(dead_code)]
pub fn directory_of(names: &[&str]) -> Directory {
    let mut directory = Directory::new();
    for name in names {
        directory.add_record(sample_record(name, None, &[]));
    }
    directory
}

/// Three contacts: two with 555 numbers, one without.
#[allow(dead_code)]
pub fn sample_directory() -> Directory {
    let mut directory = Directory::new();
    directory.add_record(sample_record("John Doe", Some("1990-05-17"), &["5551234567"]));
    directory.add_record(sample_record(
        "Jane Smith",
        None,
        &["5559876543", "2223334444"],
    ));
    directory.add_record(sample_record("Bob Brown", Some("1985-12-01"), &["1112223333"]));
    directory
}

/// Names of the given records, in order.
#[allow(dead_code)]
pub fn names_of(records: &[&ContactRecord]) -> Vec<String> {
    records.iter().map(|r| r.name().to_string()).collect()
}
