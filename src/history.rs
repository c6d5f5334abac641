// history.rs

use std::fmt;
use std::path::{Component, Path, PathBuf};

use log::debug;

use crate::error::HistoryError;
use crate::signal::{ChangeSignal, SubscriptionId};

/// A tracked file location. Two entries are equal when their lexically
/// normalized paths are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HistoryEntry(PathBuf);

impl HistoryEntry {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self(normalize(path.as_ref()))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for HistoryEntry {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<PathBuf> for HistoryEntry {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for HistoryEntry {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

impl From<&str> for HistoryEntry {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

// Purely lexical: symlinks are not resolved and the file need not exist.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Most-recent-first list of opened files, bounded by a fixed capacity and
/// free of duplicates. Every `add` and `clear` notifies subscribers exactly
/// once, after the mutation is complete.
#[derive(Debug)]
pub struct RecencyList {
    entries: Vec<HistoryEntry>,
    capacity: usize,
    signal: ChangeSignal<RecencyList>,
}

impl RecencyList {
    pub fn new(capacity: usize) -> Result<Self, HistoryError> {
        if capacity == 0 {
            return Err(HistoryError::ZeroCapacity);
        }
        Ok(Self {
            entries: Vec::new(),
            capacity,
            signal: ChangeSignal::new(),
        })
    }

    /// Builds a list from a previously saved most-recent-first sequence.
    /// Later duplicates are dropped and anything past `capacity` is cut off.
    /// No notification is sent.
    pub fn with_entries<I>(capacity: usize, entries: I) -> Result<Self, HistoryError>
    where
        I: IntoIterator<Item = HistoryEntry>,
    {
        let mut list = Self::new(capacity)?;
        for entry in entries {
            if list.entries.len() == capacity {
                break;
            }
            if !list.entries.contains(&entry) {
                list.entries.push(entry);
            }
        }
        Ok(list)
    }

    /// Moves `entry` to the front, inserting it if absent, then truncates to
    /// capacity. Re-adding the current front entry still notifies.
    pub fn add(&mut self, entry: HistoryEntry) {
        if let Some(pos) = self.entries.iter().position(|e| *e == entry) {
            self.entries.remove(pos);
        }
        debug!("history: add {}", entry);
        self.entries.insert(0, entry);
        if self.entries.len() > self.capacity {
            for evicted in self.entries.drain(self.capacity..) {
                debug!("history: evict {}", evicted);
            }
        }
        self.notify();
    }

    pub fn get(&self, index: usize) -> Result<&HistoryEntry, HistoryError> {
        self.entries.get(index).ok_or(HistoryError::OutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Always notifies, even when already empty.
    pub fn clear(&mut self) {
        debug!("history: clear ({} entries)", self.entries.len());
        self.entries.clear();
        self.notify();
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn front(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn contains(&self, entry: &HistoryEntry) -> bool {
        self.entries.contains(entry)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<HistoryEntry> {
        self.entries.clone()
    }

    /// Registers `listener` to run after every `add` and `clear`. It receives
    /// the already-updated list.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&RecencyList) + 'static,
    {
        self.signal.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.signal.unsubscribe(id)
    }

    pub fn listener_count(&self) -> usize {
        self.signal.len()
    }

    fn notify(&mut self) {
        // Listeners only see `&RecencyList`, so they cannot reach the signal
        // while it is detached.
        let mut signal = std::mem::take(&mut self.signal);
        debug!("history: notifying {} listener(s)", signal.len());
        signal.emit(self);
        self.signal = signal;
    }
}
