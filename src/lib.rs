//! Address Book - an in-memory contact directory.
//!
//! Contacts have a name, any number of ten-digit phone numbers and an optional
//! birthday. Every field is validated on the way in, so a stored record is
//! always well-formed. The directory keeps records keyed by name and supports
//! paginated iteration, substring search and JSON snapshots on disk.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (name, phone, birthday)
//! - **models**: The contact record and its snapshot entry
//! - **directory**: The name-keyed directory, pagination, search and persistence
//! - **error**: Error types for records, the directory and configuration
//! - **config**: Configuration from environment variables
//! - **observability**: Logging setup
//!
//! # Example
//!
//! ```
//! use address_book::{ContactRecord, Directory};
//!
//! let mut john = ContactRecord::new("John", Some("1990-05-17")).unwrap();
//! john.add_phone("5551234567").unwrap();
//!
//! let mut directory = Directory::new();
//! directory.add_record(john);
//!
//! assert_eq!(directory.search("555").len(), 1);
//! ```

pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;

pub use config::Config;
pub use directory::{Chunks, Directory};
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{ConfigError, DirectoryError, RecordError};
pub use models::{ContactRecord, RecordEntry};
