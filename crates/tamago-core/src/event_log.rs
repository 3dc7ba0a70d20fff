//! Bounded, newest-first log of human-readable event lines.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use tamago_types::EventLogEntry;

/// Ring buffer of the most recent [`EventLogEntry`] values.
///
/// Recording past capacity drops the oldest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLog {
    /// Newest entry at the front.
    entries: VecDeque<EventLogEntry>,
    /// Maximum number of retained entries (at least 1).
    capacity: usize,
}

impl EventLog {
    /// Create an empty log holding at most `capacity` entries. A capacity
    /// of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Prepend a line, evicting the oldest if full.
    pub fn record(&mut self, timestamp: DateTime<Utc>, text: impl Into<String>) {
        self.entries.push_front(EventLogEntry {
            timestamp,
            text: text.into(),
        });
        self.entries.truncate(self.capacity);
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &EventLogEntry> {
        self.entries.iter()
    }

    /// The most recent entry, if any.
    pub fn latest(&self) -> Option<&EventLogEntry> {
        self.entries.front()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of retained entries.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Owned copy of the entries, newest first.
    pub fn to_vec(&self) -> Vec<EventLogEntry> {
        self.entries.iter().cloned().collect()
    }
}
