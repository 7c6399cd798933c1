//! Append-only per-vehicle event history.

use std::fmt;

use wc_core::Minute;

/// One timestamped line of a vehicle's history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub at:   Minute,
    pub text: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.at, self.text)
    }
}

/// Ordered log of [`LogEntry`]s.  Entries are only ever appended.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    entries: Vec<LogEntry>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, at: Minute, text: impl Into<String>) {
        self.entries.push(LogEntry { at, text: text.into() });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Entries appended at or after position `mark` (a previous `len()`).
    ///
    /// The scheduler uses this to copy each operation's new lines into the
    /// global timeline.
    pub fn since(&self, mark: usize) -> &[LogEntry] {
        self.entries.get(mark..).unwrap_or(&[])
    }
}
