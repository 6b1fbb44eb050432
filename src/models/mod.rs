//! Data models for the contact book.
//!
//! A `ContactRecord` owns one contact's validated fields and exposes the
//! only operations allowed to change them.

pub mod record;

pub use record::{ContactRecord, NO_BIRTHDAY};
