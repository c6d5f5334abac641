// config.rs

use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_CAPACITY: usize = 8;
pub const DEFAULT_LOG_LEVEL: &str = "warn";
const HISTFILE_NAME: &str = ".recent_files";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub capacity: usize,
    /// `None` keeps the history in memory only.
    pub history_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            history_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let capacity = match lookup("RECENT_FILES_CAPACITY") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidCapacity(raw)),
            },
            None => DEFAULT_CAPACITY,
        };
        let history_file = lookup("RECENT_FILES_HISTFILE")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                lookup("HOME")
                    .filter(|s| !s.is_empty())
                    .map(|home| PathBuf::from(home).join(HISTFILE_NAME))
            });
        let log_level = lookup("RECENT_FILES_LOG")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        Ok(Self {
            capacity,
            history_file,
            log_level,
        })
    }
}
