//! Multi-selection model
//!
//! Selected ids keep insertion order and never contain duplicates.

use serde::{Deserialize, Serialize};

/// Ordered set of selected component ids
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from ids, dropping repeats
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for id in ids {
            selection.add(id);
        }
        selection
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    /// Replace the selection with a single id
    pub fn select(&mut self, id: impl Into<String>) {
        self.ids.clear();
        self.ids.push(id.into());
    }

    /// Append an id; returns false if it was already selected
    pub fn add(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Add the id if absent, remove it if present
    pub fn toggle(&mut self, id: &str) {
        if !self.remove(id) {
            self.ids.push(id.to_string());
        }
    }

    /// Remove an id; returns true if it was selected
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|selected| selected != id);
        self.ids.len() != before
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Keep only ids matching the predicate, preserving order
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.ids.retain(|id| keep(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ids_drops_duplicates_and_keeps_order() {
        let selection = Selection::from_ids(["b", "a", "b", "c", "a"]);
        assert_eq!(selection.ids(), &["b", "a", "c"]);
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = Selection::new();
        selection.toggle("r1");
        selection.toggle("r2");
        assert_eq!(selection.ids(), &["r1", "r2"]);

        selection.toggle("r1");
        assert_eq!(selection.ids(), &["r2"]);
    }

    #[test]
    fn test_select_replaces_selection() {
        let mut selection = Selection::from_ids(["a", "b"]);
        selection.select("c");
        assert_eq!(selection.ids(), &["c"]);
        assert!(!selection.add("c"));
    }
}
