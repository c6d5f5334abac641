// opener.rs

use std::path::Path;

use log::{info, warn};

use crate::history::{HistoryEntry, RecencyList};
use crate::quick_open::resolve_key;

/// File-system predicate consulted before opening.
pub trait ExistenceCheck {
    fn exists(&self, path: &Path) -> bool;
}

/// Performs the actual load of a document.
pub trait DocumentOpener {
    fn open(&mut self, entry: &HistoryEntry) -> anyhow::Result<()>;
}

/// Surfaces a missing file to the user.
pub trait FailureReporter {
    fn file_not_found(&mut self, entry: &HistoryEntry);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FsExistence;

impl ExistenceCheck for FsExistence {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened,
    NotFound,
    /// The file existed but the opener failed. The entry was still promoted.
    OpenFailed(String),
}

/// Validates that a file still exists, hands it to the opener and records it
/// as most recent. Missing files are reported and left in the history.
pub struct FileOpener<E, O, R> {
    existence: E,
    opener: O,
    reporter: R,
}

impl<E, O, R> FileOpener<E, O, R>
where
    E: ExistenceCheck,
    O: DocumentOpener,
    R: FailureReporter,
{
    pub fn new(existence: E, opener: O, reporter: R) -> Self {
        Self {
            existence,
            opener,
            reporter,
        }
    }

    pub fn open(&mut self, list: &mut RecencyList, entry: HistoryEntry) -> OpenOutcome {
        if !self.existence.exists(entry.as_path()) {
            warn!("file not found: {}", entry);
            self.reporter.file_not_found(&entry);
            return OpenOutcome::NotFound;
        }
        let outcome = match self.opener.open(&entry) {
            Ok(()) => {
                info!("opened {}", entry);
                OpenOutcome::Opened
            }
            Err(e) => {
                warn!("failed to open {}: {:#}", entry, e);
                OpenOutcome::OpenFailed(format!("{:#}", e))
            }
        };
        list.add(entry);
        outcome
    }

    /// `None` means the key does not select an entry and was not handled.
    pub fn open_by_key(&mut self, list: &mut RecencyList, key: char) -> Option<OpenOutcome> {
        let entry = resolve_key(list, key).ok()?.clone();
        Some(self.open(list, entry))
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}
