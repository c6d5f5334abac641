// store.rs

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::{debug, error, warn};

use crate::error::StoreError;
use crate::history::{HistoryEntry, RecencyList};
use crate::signal::SubscriptionId;

/// Plain-text history file: one path per line, most recent first.
#[derive(Clone, Debug)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty history. Lines that cannot be decoded as a
    /// path on this platform are skipped.
    pub fn load(&self, capacity: usize) -> Result<RecencyList, StoreError> {
        let contents = match fs::read(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no history file at {:?}", self.path);
                Vec::new()
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let entries = contents
            .split(|&b| b == b'\n')
            .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
            .filter(|line| !line.trim_ascii().is_empty())
            .filter_map(|line| {
                let path = decode_line(line);
                if path.is_none() {
                    warn!("skipping undecodable line in {:?}: {:?}", self.path, String::from_utf8_lossy(line));
                }
                path
            })
            .map(HistoryEntry::new);
        let list = RecencyList::with_entries(capacity, entries)?;
        debug!("loaded {} history entries from {:?}", list.size(), self.path);
        Ok(list)
    }

    /// Writes the raw path bytes, one per line. Paths that would not read
    /// back as the same single line (line breaks, a trailing `\r`, blank, or
    /// not UTF-8 on platforms without byte paths) are left out.
    pub fn save(&self, list: &RecencyList) -> Result<(), StoreError> {
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        let lines = list
            .iter()
            .filter_map(|entry| {
                let line = encode_path(entry.as_path()).filter(|line| storable(line));
                if line.is_none() {
                    warn!("not saving path that cannot be stored as one line: {:?}", entry.as_path());
                }
                line
            })
            .collect_vec();
        let mut body = Vec::new();
        for line in &lines {
            body.extend_from_slice(line);
            body.push(b'\n');
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, body).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;
        debug!("saved {} history entries to {:?}", lines.len(), self.path);
        Ok(())
    }

    /// Loads the history and, only if that succeeded, keeps the file in step
    /// with every later change.
    pub fn load_attached(&self, capacity: usize) -> Result<RecencyList, StoreError> {
        let mut list = self.load(capacity)?;
        self.attach(&mut list);
        Ok(list)
    }

    /// Saves after every change to `list`. Failures are logged, not raised.
    pub fn attach(&self, list: &mut RecencyList) -> SubscriptionId {
        let store = self.clone();
        list.subscribe(move |list| {
            if let Err(e) = store.save(list) {
                error!("failed to save history: {}", e);
            }
        })
    }
}

fn storable(line: &[u8]) -> bool {
    !line.contains(&b'\n') && !line.ends_with(b"\r") && !line.trim_ascii().is_empty()
}

#[cfg(unix)]
fn decode_line(line: &[u8]) -> Option<PathBuf> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    Some(PathBuf::from(OsStr::from_bytes(line)))
}

#[cfg(not(unix))]
fn decode_line(line: &[u8]) -> Option<PathBuf> {
    std::str::from_utf8(line).ok().map(PathBuf::from)
}

#[cfg(unix)]
fn encode_path(path: &Path) -> Option<&[u8]> {
    use std::os::unix::ffi::OsStrExt;
    Some(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn encode_path(path: &Path) -> Option<&[u8]> {
    path.to_str().map(str::as_bytes)
}
