//! Contact record: one person's name, phones and optional birthday.

use crate::domain::{Birthday, ContactName, Phone, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendered in summaries when no birthday is set.
pub const NO_BIRTHDAY: &str = "N/A";

/// A single contact in the book.
///
/// The name is fixed at creation. Phones keep insertion order and are not
/// deduplicated. Fields are only changed through the methods below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: ContactName,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create an empty record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: ContactName::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it. Duplicates are allowed.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(raw)?;
        tracing::debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `raw`. Returns whether one was removed.
    pub fn remove_phone(&mut self, raw: &str) -> bool {
        match self.position_of(raw) {
            Some(index) => {
                self.phones.remove(index);
                tracing::debug!(name = %self.name, phone = raw, "Removed phone");
                true
            }
            None => false,
        }
    }

    /// Replace the first phone equal to `old_raw` with `new_raw`.
    ///
    /// The replacement is appended at the end rather than put in the old
    /// slot. Returns `Ok(false)` if `old_raw` is not present. If `new_raw` is
    /// invalid the record is left untouched.
    pub fn edit_phone(&mut self, old_raw: &str, new_raw: &str) -> Result<bool, ValidationError> {
        let Some(index) = self.position_of(old_raw) else {
            return Ok(false);
        };

        let new_phone = Phone::new(new_raw)?;
        self.phones.remove(index);
        tracing::debug!(
            name = %self.name,
            old = old_raw,
            new = %new_phone,
            "Replaced phone"
        );
        self.phones.push(new_phone);
        Ok(true)
    }

    /// First phone equal to `raw`.
    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| **p == *raw)
    }

    /// Validate `raw` and store it, replacing any previous birthday.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        let birthday = Birthday::new(raw)?;
        tracing::debug!(name = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Days from `today` until the next birthday, `0` if it is today.
    ///
    /// `None` when no birthday is set.
    pub fn days_to_next_birthday(&self, today: NaiveDate) -> Option<i64> {
        let next = self.birthday.as_ref()?.next_occurrence(today)?;
        Some((next - today).num_days())
    }

    /// Phones joined with `"; "`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn position_of(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|p| *p == *raw)
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: ",
            self.name,
            self.phones_display()
        )?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => f.write_str(NO_BIRTHDAY),
        }
    }
}
