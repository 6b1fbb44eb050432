//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
///
/// The display text is shown to the user verbatim, so it must stay stable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly 10 ASCII digits.
    #[error("Phone number must contain exactly 10 digits.")]
    InvalidPhone(String),

    /// The provided birthday is not a valid `DD.MM.YYYY` date.
    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidBirthday(String),
}
