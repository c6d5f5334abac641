// error.rs

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HistoryError {
    #[error("index {index} out of range for history of length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("history capacity must be at least 1")]
    ZeroCapacity,
}

/// A quick-open key that does not map to any entry. Callers treat this as
/// "key not handled" rather than a failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("key {key:?} does not select a recent file")]
pub struct KeyNotApplicable {
    pub key: Option<char>,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("history file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("history error: {0}")]
    History(#[from] HistoryError),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid RECENT_FILES_CAPACITY {0:?}: expected a positive integer")]
    InvalidCapacity(String),
}
