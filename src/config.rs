//! Configuration management for the personal assistant.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Nothing here writes to stdout, which belongs to the command loop.

use crate::error::{ConfigError, ConfigResult};
use crate::repositories::{CONTACTS_FILE, NOTES_FILE};
use std::env;
use std::path::PathBuf;

/// Directory created under the home directory when no storage dir is set.
pub const DEFAULT_STORAGE_DIR_NAME: &str = ".personal_assistant";

/// Configuration for the personal assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the JSON files
    pub storage_dir: PathBuf,

    /// Contacts file name inside `storage_dir` (default: "contacts.json")
    pub contacts_file: String,

    /// Notes file name inside `storage_dir` (default: "notes.json")
    pub notes_file: String,

    /// Window used by `birthdays` without an argument (default: 7)
    pub birthday_days: i64,

    /// Log level when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_STORAGE_DIR`: storage directory (default: `~/.personal_assistant`)
    /// - `ASSISTANT_CONTACTS_FILE`: contacts file name (default: `contacts.json`)
    /// - `ASSISTANT_NOTES_FILE`: notes file name (default: `notes.json`)
    /// - `ASSISTANT_BIRTHDAY_DAYS`: default birthday window (default: 7)
    /// - `LOG_LEVEL`: logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let storage_dir = match non_empty_var("ASSISTANT_STORAGE_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::home_dir()
                .map(|home| home.join(DEFAULT_STORAGE_DIR_NAME))
                .ok_or_else(|| ConfigError::NoHomeDirectory("ASSISTANT_STORAGE_DIR".to_string()))?,
        };

        let contacts_file = Self::parse_file_name("ASSISTANT_CONTACTS_FILE", CONTACTS_FILE)?;
        let notes_file = Self::parse_file_name("ASSISTANT_NOTES_FILE", NOTES_FILE)?;

        if contacts_file == notes_file {
            return Err(ConfigError::InvalidValue {
                var: "ASSISTANT_NOTES_FILE".to_string(),
                reason: "Must differ from ASSISTANT_CONTACTS_FILE".to_string(),
            });
        }

        let birthday_days = Self::parse_env_i64("ASSISTANT_BIRTHDAY_DAYS", 7)?;
        if birthday_days < 0 {
            return Err(ConfigError::InvalidValue {
                var: "ASSISTANT_BIRTHDAY_DAYS".to_string(),
                reason: format!("Must be a non-negative number, got: {}", birthday_days),
            });
        }

        let log_level = non_empty_var("LOG_LEVEL").unwrap_or_else(|| "warn".to_string());

        Ok(Config {
            storage_dir,
            contacts_file,
            notes_file,
            birthday_days,
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

    /// Read a bare file name; path separators are rejected.
    fn parse_file_name(var_name: &str, default: &str) -> ConfigResult<String> {
        match non_empty_var(var_name) {
            Some(name) if name.contains(['/', '\\']) => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a file name without directories, got: {}", name),
            }),
            Some(name) => Ok(name),
            None => Ok(default.to_string()),
        }
    }
}

fn non_empty_var(var_name: &str) -> Option<String> {
    env::var(var_name)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

impl Default for Config {
    fn default() -> Self {
        let storage_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_STORAGE_DIR_NAME);

        Config {
            storage_dir,
            contacts_file: CONTACTS_FILE.to_string(),
            notes_file: NOTES_FILE.to_string(),
            birthday_days: 7,
            log_level: "warn".to_string(),
        }
    }
}
