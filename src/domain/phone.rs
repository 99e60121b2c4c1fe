//! Phone number field.

use super::errors::ValidationError;
use super::field::{Field, FieldKind};

/// Number of digits a phone number must have.
pub const PHONE_DIGITS: usize = 10;

/// Marker for phone fields.
///
/// # Validation Rules
///
/// - Exactly ten characters
/// - Every character is an ASCII decimal digit (`0-9`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneKind;

impl PhoneKind {
    fn is_valid(phone: &str) -> bool {
        phone.chars().count() == PHONE_DIGITS && phone.chars().all(|c| c.is_ascii_digit())
    }
}

impl FieldKind for PhoneKind {
    const LABEL: &'static str = "phone";

    fn validate(value: &str) -> Result<(), ValidationError> {
        if !Self::is_valid(value) {
            return Err(ValidationError::InvalidPhone(value.to_string()));
        }
        Ok(())
    }
}

/// A ten-digit phone number.
///
/// # Example
///
/// ```
/// use address_book::domain::Phone;
///
/// let phone = Phone::new("5551234567").unwrap();
/// assert_eq!(phone.as_str(), "5551234567");
/// assert!(Phone::new("555-123-4567").is_err());
/// ```
pub type Phone = Field<PhoneKind>;
