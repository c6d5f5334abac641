//! Recently opened files: a bounded, deduplicated, most-recent-first list
//! with change notification, plus the pieces an application wires around it
//! (quick-open keys, open-and-validate, a numbered menu, a history file).

pub mod config;
pub mod error;
pub mod history;
pub mod logging;
pub mod menu;
pub mod opener;
pub mod quick_open;
pub mod signal;
pub mod store;

pub use error::{ConfigError, HistoryError, KeyNotApplicable, StoreError};
pub use history::{HistoryEntry, RecencyList};
pub use opener::{DocumentOpener, ExistenceCheck, FailureReporter, FileOpener, FsExistence, OpenOutcome};
pub use signal::{ChangeSignal, SubscriptionId};
