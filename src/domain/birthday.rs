//! Birthday field.

use super::errors::ValidationError;
use super::field::{Field, FieldKind};
use once_cell::sync::Lazy;
use regex::Regex;

/// `YYYY-MM-DD` at the start of the value. Trailing text is allowed.
static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("Failed to compile birthday regex")
});

/// Marker for birthday fields.
///
/// Only the shape of the date is checked here. Whether the month and day
/// form a real calendar date is decided when the birthday is used.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BirthdayKind;

impl FieldKind for BirthdayKind {
    const LABEL: &'static str = "birthday";

    fn validate(value: &str) -> Result<(), ValidationError> {
        if !BIRTHDAY_PATTERN.is_match(value) {
            return Err(ValidationError::InvalidBirthday(value.to_string()));
        }
        Ok(())
    }
}

/// A birthday stored as `YYYY-MM-DD`.
pub type Birthday = Field<BirthdayKind>;

impl Field<BirthdayKind> {
    /// Split the stored value into `(year, month, day)`.
    ///
    /// No calendar check is made: `"2000-13-45"` yields `(2000, 13, 45)`.
    pub fn components(&self) -> (i32, u32, u32) {
        let value = self.as_str();
        // Invariant: constructor validates the ASCII `dddd-dd-dd` prefix
        let year = value[0..4]
            .parse()
            .expect("birthday validated to start with 4 digits");
        let month = value[5..7]
            .parse()
            .expect("birthday validated to have 2 month digits");
        let day = value[8..10]
            .parse()
            .expect("birthday validated to have 2 day digits");
        (year, month, day)
    }

    /// Month and day, ignoring the year.
    pub fn month_day(&self) -> (u32, u32) {
        let (_, month, day) = self.components();
        (month, day)
    }
}
