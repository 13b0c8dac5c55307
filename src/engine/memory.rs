//! Memory accumulator with a bounded history.
//!
//! The history exists for display only and never affects arithmetic; the
//! accumulator value and its history always mutate together.

use std::collections::VecDeque;
use std::fmt;

/// Default number of history entries kept for display.
pub const DEFAULT_HISTORY_CAP: usize = 10;

/// One recorded memory update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryEntry {
    /// Whether the update added to or subtracted from memory.
    pub is_addition: bool,
    /// Label for the update, usually the operation that produced the value.
    pub description: String,
}

impl fmt::Display for MemoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.is_addition { "M+" } else { "M-" };
        write!(f, "{} {}", sign, self.description)
    }
}

/// The memory accumulator.
#[derive(Clone, Debug)]
pub struct MemoryBank {
    value: f64,
    history: VecDeque<MemoryEntry>,
    cap: usize,
}

impl MemoryBank {
    pub fn new(cap: usize) -> Self {
        Self {
            value: 0.0,
            history: VecDeque::new(),
            cap,
        }
    }

    /// Current accumulator value. Always finite.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Store a new accumulator value and record the update, dropping the
    /// oldest entries beyond the cap.
    pub fn record(&mut self, value: f64, entry: MemoryEntry) {
        self.value = value;
        self.history.push_back(entry);
        while self.history.len() > self.cap {
            self.history.pop_front();
        }
    }

    /// Drop the value after an overflowing update; history stays.
    pub fn reset_value(&mut self) {
        self.value = 0.0;
    }

    /// Clear the value and the history.
    pub fn clear(&mut self) {
        self.value = 0.0;
        self.history.clear();
    }

    /// Recorded updates, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &MemoryEntry> {
        self.history.iter()
    }

    /// History rendered one entry per line, for a UI list or label.
    pub fn history_text(&self) -> String {
        self.history
            .iter()
            .map(MemoryEntry::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
