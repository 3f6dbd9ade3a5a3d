use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Undo/redo history over committed markup snapshots
///
/// Every successful edit records the markup it produced. Undo and redo move
/// a cursor over the recorded snapshots; recording after an undo drops the
/// redo tail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct History {
    /// Committed markups, oldest first
    pub entries: VecDeque<String>,
    /// Position of the current markup in `entries`
    pub current_index: usize,
    /// Maximum number of undo steps kept
    max_size: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(100)
    }
}

impl History {
    /// Create an empty history keeping at most `max_size` undo steps
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            current_index: 0,
            max_size: max_size.max(1),
        }
    }

    /// Forget everything and start over from `markup`
    pub fn reset(&mut self, markup: &str) {
        self.entries.clear();
        self.entries.push_back(markup.to_string());
        self.current_index = 0;
    }

    /// Record a newly committed markup
    pub fn record(&mut self, markup: &str) {
        if self.current() == Some(markup) {
            return;
        }

        // Truncate any redo history when a new snapshot is added
        self.entries.truncate(self.current_index + 1);
        self.entries.push_back(markup.to_string());
        self.current_index = self.entries.len() - 1;

        // Enforce max size (the oldest snapshot is the base, not a step)
        while self.entries.len() > self.max_size + 1 {
            self.entries.pop_front();
            self.current_index = self.current_index.saturating_sub(1);
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.current_index).map(String::as_str)
    }

    /// Step back, returning the markup to restore
    pub fn undo(&mut self) -> Option<&str> {
        if !self.can_undo() {
            return None;
        }
        self.current_index -= 1;
        self.current()
    }

    /// Step forward again after an undo
    pub fn redo(&mut self) -> Option<&str> {
        if !self.can_redo() {
            return None;
        }
        self.current_index += 1;
        self.current()
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.current_index > 0
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.current_index + 1 < self.entries.len()
    }

    /// Get the number of available undo steps
    pub fn undo_count(&self) -> usize {
        self.current_index
    }

    /// Get the number of available redo steps
    pub fn redo_count(&self) -> usize {
        self.entries.len().saturating_sub(self.current_index + 1)
    }
}
