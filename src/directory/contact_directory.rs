//! Name-keyed collection of contact records.

use crate::models::ContactRecord;
use chrono::NaiveDate;
use std::collections::HashMap;

/// The address book: contact records keyed by name.
///
/// Records keep the order they were first added in. Iteration, search and
/// snapshots all follow that order. Adding a record under a name that is
/// already present replaces the old record in its existing position.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    records: Vec<ContactRecord>,
    index: HashMap<String, usize>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, replacing any record with the same name.
    pub fn add_record(&mut self, record: ContactRecord) {
        let key = record.name().as_str().to_string();
        match self.index.get(&key).copied() {
            Some(position) => {
                tracing::debug!(name = %key, "Replacing existing record");
                self.records[position] = record;
            }
            None => {
                tracing::debug!(name = %key, "Adding record");
                self.index.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.index.get(name).map(|&position| &self.records[position])
    }

    /// Look up a record by name for editing its phones or birthday.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        let position = *self.index.get(name)?;
        Some(&mut self.records[position])
    }

    /// Remove the record stored under `name`.
    ///
    /// Deleting a name that is not present is a no-op and returns `None`.
    pub fn delete(&mut self, name: &str) -> Option<ContactRecord> {
        let Some(position) = self.index.remove(name) else {
            tracing::debug!(name = %name, "Delete of unknown name ignored");
            return None;
        };

        let removed = self.records.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }

        tracing::debug!(name = %name, "Deleted record");
        Some(removed)
    }

    /// Check whether a record is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in directory order.
    pub fn records(&self) -> std::slice::Iter<'_, ContactRecord> {
        self.records.iter()
    }

    /// All names in directory order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|r| r.name().as_str())
    }

    pub(super) fn as_slice(&self) -> &[ContactRecord] {
        &self.records
    }

    /// Records whose next birthday is at most `within_days` after `today`.
    ///
    /// Results are ordered by days remaining, ties in directory order.
    /// Records whose birthday is not a real date in the year checked are
    /// skipped.
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        within_days: i64,
    ) -> Vec<(&ContactRecord, i64)> {
        let mut upcoming: Vec<(&ContactRecord, i64)> = self
            .records
            .iter()
            .filter_map(|record| match record.days_to_birthday_from(today) {
                Ok(Some(days)) if days <= within_days => Some((record, days)),
                Ok(_) => None,
                Err(e) => {
                    tracing::warn!(name = %record.name(), error = %e, "Skipping birthday");
                    None
                }
            })
            .collect();

        upcoming.sort_by_key(|(_, days)| *days);
        upcoming
    }
}
