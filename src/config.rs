//! Configuration management for the contact book assistant.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Everything has a default, so the assistant runs with no setup.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Levels accepted by `LOG_LEVEL`.
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Configuration for the contact book assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy does not print to stdout, which carries command output
        let _ = dotenvy::dotenv();

        let log_level = Self::parse_log_level("LOG_LEVEL", "error")?;

        Ok(Config { log_level })
    }

    /// Read a log level, lower-cased, falling back to `default` when unset.
    fn parse_log_level(var_name: &str, default: &str) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) => {
                let level = val.trim().to_lowercase();
                if LOG_LEVELS.contains(&level.as_str()) {
                    Ok(level)
                } else {
                    Err(ConfigError::InvalidValue {
                        var: var_name.to_string(),
                        reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), val),
                    })
                }
            }
            Err(_) => Ok(default.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
        }
    }
}
