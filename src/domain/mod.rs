//! Domain value objects and types.
//!
//! This module contains the validated fields a contact record is built from:
//! names, phone numbers, and birthdays. Each field checks its value on
//! construction and on every update, so an invalid value is never stored.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BirthdayKind};
pub use errors::ValidationError;
pub use field::{Field, FieldKind};
pub use name::{Name, NameKind};
pub use phone::{Phone, PhoneKind, PHONE_DIGITS};
