//! Generic validated field.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// The validation rule attached to a kind of field.
///
/// Each kind is a zero-sized marker type, so a `Field<K>` carries its rule in
/// the type rather than at runtime.
pub trait FieldKind {
    /// Short label used in log output.
    const LABEL: &'static str;

    /// Check a candidate value against this kind's rule.
    fn validate(value: &str) -> Result<(), ValidationError>;
}

/// A single string value that always satisfies the rule of its kind `K`.
///
/// # Example
///
/// ```
/// use address_book::domain::Phone;
///
/// let mut phone = Phone::new("5551234567").unwrap();
/// assert!(phone.set("not-a-phone").is_err());
/// assert_eq!(phone.as_str(), "5551234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field<K: FieldKind> {
    value: String,
    _kind: PhantomData<K>,
}

impl<K: FieldKind> Field<K> {
    /// Create a new field, validating the value.
    ///
    /// # Errors
    ///
    /// Returns the kind's `ValidationError` if the value does not satisfy its rule.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        K::validate(&value)?;
        Ok(Self {
            value,
            _kind: PhantomData,
        })
    }

    /// Replace the stored value.
    ///
    /// On failure the previous value is kept.
    pub fn set(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        if let Err(e) = K::validate(&value) {
            tracing::debug!(field = K::LABEL, error = %e, "Rejected field update");
            return Err(e);
        }
        self.value = value;
        tracing::trace!(field = K::LABEL, "Field updated");
        Ok(())
    }

    /// Get the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<K: FieldKind> PartialEq<str> for Field<K> {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

// Serde support - serialize as string
impl<K: FieldKind> Serialize for Field<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de, K: FieldKind> Deserialize<'de> for Field<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Field::new(s).map_err(serde::de::Error::custom)
    }
}

impl<K: FieldKind> fmt::Display for Field<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
