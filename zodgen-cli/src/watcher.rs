//! File watcher for development mode.
//!
//! Watches the IR document for changes and yields debounced events so
//! generation can re-run automatically.

use crate::error::{CliResult, WatchError};
use notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{new_debouncer, DebouncedEvent, Debouncer};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;

/// Event types for document changes.
#[derive(Debug, Clone)]
pub enum WatchEvent {
    /// The document was modified or created.
    Changed(PathBuf),
    /// The document was deleted.
    Deleted(PathBuf),
    /// An error occurred.
    Error(String),
}

/// Watcher for one IR document file.
pub struct FileWatcher {
    /// Path to the IR document.
    path: PathBuf,
    /// Debounce duration in milliseconds.
    debounce_ms: u64,
}

impl FileWatcher {
    /// Create a watcher for the given IR document path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            debounce_ms: 500,
        }
    }

    /// Set the debounce duration in milliseconds.
    pub fn with_debounce(mut self, ms: u64) -> Self {
        self.debounce_ms = ms;
        self
    }

    /// Start watching for changes.
    ///
    /// The document's parent directory is watched so editors that replace
    /// the file on save (write-to-temp then rename) are still observed.
    /// Returns the debouncer, which must stay alive, plus the event
    /// receiver.
    pub fn watch(&self) -> CliResult<(Debouncer<RecommendedWatcher>, Receiver<WatchEvent>)> {
        let (tx, rx) = channel::<WatchEvent>();
        let watched_file = self.path.clone();

        let mut debouncer = new_debouncer(
            Duration::from_millis(self.debounce_ms),
            move |result: Result<Vec<DebouncedEvent>, notify::Error>| match result {
                Ok(events) => {
                    for event in events {
                        let path = event.path;
                        if path != watched_file {
                            continue;
                        }
                        let watch_event = if path.exists() {
                            WatchEvent::Changed(path)
                        } else {
                            WatchEvent::Deleted(path)
                        };
                        let _ = tx.send(watch_event);
                    }
                }
                Err(e) => {
                    let _ = tx.send(WatchEvent::Error(e.to_string()));
                }
            },
        )
        .map_err(|e| WatchError::Init(e.to_string()))?;

        let watch_root = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        debouncer
            .watcher()
            .watch(watch_root, RecursiveMode::NonRecursive)
            .map_err(|e| WatchError::Init(e.to_string()))?;

        Ok((debouncer, rx))
    }

    /// The document path being watched.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WatchEvent {
    /// The path associated with this event.
    pub fn path(&self) -> Option<&Path> {
        match self {
            WatchEvent::Changed(p) | WatchEvent::Deleted(p) => Some(p),
            WatchEvent::Error(_) => None,
        }
    }

    /// Check if this is an error event.
    pub fn is_error(&self) -> bool {
        matches!(self, WatchEvent::Error(_))
    }

    /// The error message if this is an error event.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            WatchEvent::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_event_path() {
        let path = PathBuf::from("/test/ir.json");

        let changed = WatchEvent::Changed(path.clone());
        assert_eq!(changed.path(), Some(path.as_path()));

        let deleted = WatchEvent::Deleted(path.clone());
        assert_eq!(deleted.path(), Some(path.as_path()));

        let error = WatchEvent::Error("boom".to_string());
        assert_eq!(error.path(), None);
    }

    #[test]
    fn test_watch_event_is_error() {
        assert!(!WatchEvent::Changed(PathBuf::from("/x")).is_error());
        assert!(WatchEvent::Error("x".to_string()).is_error());
    }

    #[test]
    fn test_watch_event_error_message() {
        assert_eq!(
            WatchEvent::Changed(PathBuf::from("/x")).error_message(),
            None
        );
        assert_eq!(
            WatchEvent::Error("boom".to_string()).error_message(),
            Some("boom")
        );
    }

    #[test]
    fn test_file_watcher_builder() {
        let watcher = FileWatcher::new("/test/ir.json").with_debounce(1000);
        assert_eq!(watcher.path(), Path::new("/test/ir.json"));
        assert_eq!(watcher.debounce_ms, 1000);
    }
}
