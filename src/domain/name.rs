//! Contact name field.

use super::errors::ValidationError;
use super::field::{Field, FieldKind};

/// Marker for name fields. Any string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameKind;

impl FieldKind for NameKind {
    const LABEL: &'static str = "name";

    fn validate(_value: &str) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// A contact's name, used as its key in the directory.
pub type Name = Field<NameKind>;
