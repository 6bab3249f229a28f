//! Bounded input history, most-recent-first.

use std::collections::VecDeque;

/// History of submitted input lines. Index 0 is the most recent entry.
/// Consecutive identical submissions are stored once; the oldest entry is
/// evicted once capacity is reached.
#[derive(Debug)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    capacity: usize,
}

impl CommandHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a submitted line. Empty/whitespace-only lines and duplicates
    /// of the most recent entry are ignored.
    pub fn push(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        if self.entries.front().map(String::as_str) == Some(line) {
            return;
        }
        self.entries.push_front(line.to_string());
        while self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }

    /// Entry at recall position `index` (0 = most recent).
    pub fn entry(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
