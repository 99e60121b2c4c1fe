//! JSON snapshots of a directory.
//!
//! A snapshot is a JSON array of [`RecordEntry`] objects, one per record, in
//! directory order.

use super::contact_directory::Directory;
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{ContactRecord, RecordEntry};
use std::fs;
use std::path::Path;

impl Directory {
    /// Serialize every record to a JSON snapshot string.
    pub fn to_json_string(&self) -> DirectoryResult<String> {
        let entries: Vec<RecordEntry> = self.records().map(RecordEntry::from).collect();
        Ok(serde_json::to_string_pretty(&entries)?)
    }

    /// Add every record of a JSON snapshot to this directory.
    ///
    /// Entries are rebuilt in full before any is inserted, so on error the
    /// directory is left unchanged. Entries whose name is already present
    /// replace the existing record.
    ///
    /// Returns the number of entries loaded.
    pub fn load_json_str(&mut self, json: &str) -> DirectoryResult<usize> {
        self.load_json_slice(json.as_bytes())
    }

    /// Same as [`load_json_str`](Self::load_json_str) for raw bytes.
    ///
    /// Bytes that are not UTF-8 are a `DirectoryError::Parse`.
    pub fn load_json_slice(&mut self, json: &[u8]) -> DirectoryResult<usize> {
        let entries: Vec<RecordEntry> = serde_json::from_slice(json)?;

        let records = entries
            .into_iter()
            .map(|entry| {
                let name = entry.name.clone();
                ContactRecord::try_from(entry)
                    .map_err(|source| DirectoryError::Validation { name, source })
            })
            .collect::<DirectoryResult<Vec<_>>>()?;

        let count = records.len();
        for record in records {
            self.add_record(record);
        }
        Ok(count)
    }

    /// Build a new directory from a JSON snapshot string.
    pub fn from_json_str(json: &str) -> DirectoryResult<Self> {
        let mut directory = Self::new();
        directory.load_json_str(json)?;
        Ok(directory)
    }

    /// Write a snapshot of the directory to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::Io` if the file cannot be written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> DirectoryResult<()> {
        let path = path.as_ref();
        let json = self.to_json_string()?;

        fs::write(path, json).map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "Failed to write snapshot");
            DirectoryError::Io(e)
        })?;

        tracing::info!(path = %path.display(), records = self.len(), "Saved snapshot");
        Ok(())
    }

    /// Read a snapshot from `path` and add its records to this directory.
    ///
    /// # Errors
    ///
    /// - `DirectoryError::Io` if the file cannot be read
    /// - `DirectoryError::Parse` if it is not a JSON list of entries
    /// - `DirectoryError::Validation` if an entry has an invalid phone or birthday
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> DirectoryResult<usize> {
        let path = path.as_ref();
        let json = fs::read(path)?;

        let count = self.load_json_slice(&json).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Failed to load snapshot");
            e
        })?;

        tracing::info!(path = %path.display(), records = count, "Loaded snapshot");
        Ok(count)
    }
}
