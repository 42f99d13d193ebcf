//! Configuration management for the phonebook.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default location of the contacts file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "data.csv";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for the phonebook.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the contacts file (default: "data.csv")
    pub data_file: PathBuf,

    /// Log level used when `RUST_LOG` is not set (default: "warn")
    pub log_level: String,

    /// Prompt printed before each command (default: ">>> ")
    pub prompt: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PHONEBOOK_DATA_FILE`: Path of the contacts file (default: data.csv)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    /// - `PHONEBOOK_PROMPT`: Input prompt (default: ">>> ")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let data_file = match env::var("PHONEBOOK_DATA_FILE") {
            Ok(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "PHONEBOOK_DATA_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(value) => PathBuf::from(value),
            Err(_) => defaults.data_file,
        };

        let log_level = match env::var("LOG_LEVEL") {
            Ok(value) => Self::parse_log_level(&value)?,
            Err(_) => defaults.log_level,
        };

        let prompt = env::var("PHONEBOOK_PROMPT").unwrap_or(defaults.prompt);

        Ok(Config {
            data_file,
            log_level,
            prompt,
        })
    }

    /// Normalize and validate a log level name.
    fn parse_log_level(value: &str) -> ConfigResult<String> {
        let level = value.trim().to_ascii_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            Ok(level)
        } else {
            Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), value),
            })
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: "warn".to_string(),
            prompt: ">>> ".to_string(),
        }
    }
}
