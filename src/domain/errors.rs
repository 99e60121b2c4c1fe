//! Domain validation errors.

use std::fmt;

/// Errors that can occur when a value fails its field's validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly ten decimal digits.
    InvalidPhone(String),

    /// The provided birthday does not start with `YYYY-MM-DD`.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(_) => write!(f, "Invalid phone number"),
            Self::InvalidBirthday(_) => write!(f, "Invalid date format, please use YYYY-MM-DD"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::InvalidPhone("123".to_string());
        assert_eq!(err.to_string(), "Invalid phone number");

        let err = ValidationError::InvalidBirthday("01/02/1990".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid date format, please use YYYY-MM-DD"
        );
    }
}
