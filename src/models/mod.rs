//! Data models for the address book.
//!
//! This module contains the contact record and the entry type it is
//! persisted as.

pub mod record;
pub mod snapshot;

pub use record::ContactRecord;
pub use snapshot::RecordEntry;
