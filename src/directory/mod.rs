//! The contact directory and its operations.
//!
//! This module provides the name-keyed [`Directory`] together with paginated
//! iteration, substring search and JSON snapshot persistence.

pub mod chunks;
pub mod contact_directory;
pub mod persistence;
pub mod search;

pub use chunks::Chunks;
pub use contact_directory::Directory;
