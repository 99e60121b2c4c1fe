//! Contact record: a name, its phone numbers and an optional birthday.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{RecordError, RecordResult};
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

/// A single contact in the address book.
///
/// The name is fixed at construction and is the key the record is stored
/// under in a [`Directory`](crate::directory::Directory). Phones keep their
/// insertion order and may repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a new record with a name and an optional birthday.
    ///
    /// An empty birthday string means no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the birthday is not `YYYY-MM-DD`.
    pub fn new(name: impl Into<String>, birthday: Option<&str>) -> Result<Self, ValidationError> {
        let name = Name::new(name)?;
        let birthday = birthday
            .filter(|b| !b.is_empty())
            .map(Birthday::new)
            .transpose()?;
        Ok(Self {
            name,
            phones: Vec::new(),
            birthday,
        })
    }

    /// The record's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phone numbers in the order they were added.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The birthday, if one is set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Set or replace the birthday.
    ///
    /// On failure the current birthday is left as it was.
    pub fn set_birthday(&mut self, value: &str) -> Result<(), ValidationError> {
        match self.birthday.as_mut() {
            Some(birthday) => birthday.set(value),
            None => {
                self.birthday = Some(Birthday::new(value)?);
                Ok(())
            }
        }
    }

    /// The full stored birthday as a calendar date, year included.
    pub fn birthday_date(&self) -> RecordResult<Option<NaiveDate>> {
        let Some(birthday) = &self.birthday else {
            return Ok(None);
        };
        let (year, month, day) = birthday.components();
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Some)
            .ok_or(RecordError::InvalidCalendarDate { year, month, day })
    }

    /// Days from today until the next birthday.
    ///
    /// See [`days_to_birthday_from`](Self::days_to_birthday_from).
    pub fn days_to_birthday(&self) -> RecordResult<Option<i64>> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next occurrence of the birthday's month and day.
    ///
    /// Returns `Ok(None)` when no birthday is set and `Ok(Some(0))` when the
    /// birthday is `today`. The stored year is ignored.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::InvalidCalendarDate` when the month and day do not
    /// exist in the year being checked, e.g. February 29 in a non-leap year.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> RecordResult<Option<i64>> {
        let Some(birthday) = &self.birthday else {
            return Ok(None);
        };
        let (month, day) = birthday.month_day();
        let in_year = |year: i32| {
            NaiveDate::from_ymd_opt(year, month, day)
                .ok_or(RecordError::InvalidCalendarDate { year, month, day })
        };

        let mut next = in_year(today.year())?;
        if today > next {
            next = in_year(today.year() + 1)?;
        }

        Ok(Some((next - today).num_days()))
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, value: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(value)?);
        Ok(())
    }

    /// Remove the first phone equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::PhoneNotFound` if no phone matches.
    pub fn remove_phone(&mut self, value: &str) -> RecordResult<()> {
        let index = self.position_of(value).ok_or(RecordError::PhoneNotFound)?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::PhoneNotFound` if `old` is not on the record, or
    /// `RecordError::Validation` if `new` is not a valid phone number. The
    /// record is unchanged in both cases.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        let index = self.position_of(old).ok_or(RecordError::PhoneNotFound)?;
        self.phones[index].set(new)?;
        Ok(())
    }

    /// The first phone equal to `value`.
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| **p == *value)
    }

    fn position_of(&self, value: &str) -> Option<usize> {
        self.phones.iter().position(|p| *p == *value)
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )
    }
}
