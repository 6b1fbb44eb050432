//! Contact Book Assistant - an interactive command-line contact manager.
//!
//! Stores contact names, phone numbers and birthdays in memory, accepts
//! line-based commands, and answers "who has a birthday in the next N days".
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Phone`, `Birthday`, `ContactName`)
//! - **models**: `ContactRecord`, one contact and its mutation operations
//! - **repositories**: `ContactBook`, the in-memory keyed collection
//! - **commands**: Input parsing, command handlers and dispatch
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use commands::{dispatch, handle_line, parse_input, Command, Outcome};
pub use config::Config;
pub use domain::{Birthday, ContactName, Phone, ValidationError};
pub use error::{CommandError, ConfigError};
pub use models::ContactRecord;
pub use repositories::ContactBook;
