//! In-memory contact book keyed by name.

use crate::models::ContactRecord;
use chrono::{Datelike, Days, NaiveDate};

/// Window used by the `birthdays` command.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// In-memory collection of contact records keyed by name.
///
/// Records are kept in insertion order so listings are deterministic.
/// There is never more than one record per name: adding a record under an
/// existing name replaces the stored one in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    records: Vec<ContactRecord>,
}

impl ContactBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, or replace the record already stored under its name.
    ///
    /// The name is not checked; empty names are accepted.
    pub fn add_record(&mut self, record: ContactRecord) {
        match self.position_of(record.name().as_str()) {
            Some(index) => {
                tracing::debug!(name = %record.name(), "Replacing contact");
                self.records[index] = record;
            }
            None => {
                tracing::debug!(name = %record.name(), "Adding contact");
                self.records.push(record);
            }
        }
    }

    /// The record stored under `name`, creating an empty one if there is none.
    ///
    /// The flag is `true` when the record was created by this call.
    pub fn find_or_insert(&mut self, name: &str) -> (&mut ContactRecord, bool) {
        match self.position_of(name) {
            Some(index) => (&mut self.records[index], false),
            None => {
                tracing::debug!(name, "Adding contact");
                self.records.push(ContactRecord::new(name));
                let index = self.records.len() - 1;
                (&mut self.records[index], true)
            }
        }
    }

    /// Exact, case-sensitive lookup by name.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove the record stored under `name`. Returns whether it existed.
    pub fn delete(&mut self, name: &str) -> bool {
        match self.position_of(name) {
            Some(index) => {
                self.records.remove(index);
                tracing::debug!(name, "Deleted contact");
                true
            }
            None => false,
        }
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose birthday falls in `[today, today + window_days]`.
    ///
    /// This year's occurrence is tested first. Only when it has already
    /// passed is next year's occurrence tested against the same window.
    /// Results keep insertion order.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<&ContactRecord> {
        let end = today
            .checked_add_days(Days::new(u64::from(window_days)))
            .unwrap_or(NaiveDate::MAX);
        let in_window = |date: NaiveDate| today <= date && date <= end;

        self.records
            .iter()
            .filter(|record| {
                let Some(birthday) = record.birthday() else {
                    return false;
                };
                let Some(this_year) = birthday.occurrence_in(today.year()) else {
                    return false;
                };

                if in_window(this_year) {
                    true
                } else if this_year < today {
                    birthday
                        .occurrence_in(today.year() + 1)
                        .is_some_and(|date| in_window(date))
                } else {
                    false
                }
            })
            .collect()
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

impl<'a> IntoIterator for &'a ContactBook {
    type Item = &'a ContactRecord;
    type IntoIter = std::slice::Iter<'a, ContactRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
