//! Configuration management for the personal assistant.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Nothing here writes to stdout, which is reserved for the REPL.

use crate::error::{ConfigError, ConfigResult};
use crate::storage::DATA_FILE_NAME;
use std::env;
use std::path::PathBuf;

/// Configuration for the personal assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON document holding contacts and notes
    pub data_file: PathBuf,

    /// Largest window accepted by the birthday lookup (default: 365)
    pub birthdays_max_days: i64,

    /// Window used by `birthdays` when no argument is given (default: 7)
    pub birthdays_default_days: i64,

    /// Log level used when RUST_LOG is not set (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_DATA_FILE`: data file path (default: `~/.personal_assistant_data.json`)
    /// - `ASSISTANT_BIRTHDAYS_MAX_DAYS`: maximum lookahead in days (default: 365)
    /// - `ASSISTANT_BIRTHDAYS_DEFAULT_DAYS`: default lookahead in days (default: 7)
    /// - `LOG_LEVEL`: logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let data_file = env::var("ASSISTANT_DATA_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_data_file);

        let birthdays_max_days = Self::parse_env_i64("ASSISTANT_BIRTHDAYS_MAX_DAYS", 365)?;
        if birthdays_max_days < 1 {
            return Err(ConfigError::InvalidValue {
                var: "ASSISTANT_BIRTHDAYS_MAX_DAYS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let birthdays_default_days = Self::parse_env_i64("ASSISTANT_BIRTHDAYS_DEFAULT_DAYS", 7)?;
        if !(0..=birthdays_max_days).contains(&birthdays_default_days) {
            return Err(ConfigError::InvalidValue {
                var: "ASSISTANT_BIRTHDAYS_DEFAULT_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", birthdays_max_days),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            data_file,
            birthdays_max_days,
            birthdays_default_days,
            log_level,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a whole number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: default_data_file(),
            birthdays_max_days: 365,
            birthdays_default_days: 7,
            log_level: "warn".to_string(),
        }
    }
}

/// `~/.personal_assistant_data.json`, or the current directory without a home.
fn default_data_file() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_FILE_NAME)
}
