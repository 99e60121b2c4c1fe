//! Substring search across names and phone numbers.

use super::contact_directory::Directory;
use crate::models::ContactRecord;
use std::time::Instant;

/// Check whether a record matches an already-lowercased query.
fn matches(record: &ContactRecord, needle: &str) -> bool {
    record.name().as_str().to_lowercase().contains(needle)
        || record
            .phones()
            .iter()
            .any(|phone| phone.as_str().to_lowercase().contains(needle))
}

impl Directory {
    /// Case-insensitive substring search over names and phone numbers.
    ///
    /// A record matches if the query occurs in its name or in any of its
    /// phones. Matches are returned in directory order. An empty query
    /// matches every record.
    pub fn search(&self, query: &str) -> Vec<&ContactRecord> {
        let start = Instant::now();
        let needle = query.to_lowercase();

        let results: Vec<&ContactRecord> = self
            .records()
            .filter(|record| matches(record, &needle))
            .collect();

        tracing::debug!(
            query = %query,
            duration_ms = start.elapsed().as_millis(),
            result_count = results.len(),
            "Search completed"
        );

        results
    }
}
