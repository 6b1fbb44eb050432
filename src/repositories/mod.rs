//! Storage for contact records.

mod contact_book;

pub use contact_book::{ContactBook, DEFAULT_BIRTHDAY_WINDOW_DAYS};
