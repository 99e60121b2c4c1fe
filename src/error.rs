//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation failures live in [`crate::domain::ValidationError`] and are
//! wrapped by the errors below.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when working with a single contact record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number to remove or edit is not on the record
    #[error("Phone number not found")]
    PhoneNotFound,

    /// The stored birthday's month and day do not exist in the given year
    #[error("Invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidCalendarDate { year: i32, month: u32, day: u32 },
}

/// Errors that can occur during directory operations.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// Reading or writing the snapshot file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot content is not well-formed
    #[error("Snapshot parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field in the snapshot failed validation
    #[error("Invalid snapshot entry '{name}': {source}")]
    Validation {
        name: String,
        #[source]
        source: ValidationError,
    },

    /// Chunk size must be at least one
    #[error("Chunk size must be at least 1")]
    InvalidChunkSize,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
