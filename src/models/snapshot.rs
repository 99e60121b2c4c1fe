//! On-disk representation of a contact record.

use super::record::ContactRecord;
use crate::domain::ValidationError;
use serde::{Deserialize, Serialize};

/// One entry of a persisted snapshot.
///
/// A snapshot file is a JSON array of these:
///
/// ```json
/// [{"name": "John", "birthday": "1990-05-17", "phones": ["5551234567"]}]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordEntry {
    /// Contact name
    pub name: String,

    /// Birthday as stored on the record, `null` when unset
    #[serde(default)]
    pub birthday: Option<String>,

    /// Phone numbers in record order
    #[serde(default)]
    pub phones: Vec<String>,
}

impl From<&ContactRecord> for RecordEntry {
    fn from(record: &ContactRecord) -> Self {
        Self {
            name: record.name().to_string(),
            birthday: record.birthday().map(|b| b.to_string()),
            phones: record.phones().iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl TryFrom<RecordEntry> for ContactRecord {
    type Error = ValidationError;

    /// Rebuild a record: name and birthday first, then each phone in order.
    fn try_from(entry: RecordEntry) -> Result<Self, Self::Error> {
        let mut record = ContactRecord::new(entry.name, entry.birthday.as_deref())?;
        for phone in &entry.phones {
            record.add_phone(phone)?;
        }
        Ok(record)
    }
}
