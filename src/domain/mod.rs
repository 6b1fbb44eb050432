//! Domain value objects and types.
//!
//! Type-safe wrappers for the scalar attributes of a contact. Phones and
//! birthdays are validated at construction time, so an invalid value can
//! never be stored in a record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::Phone;
