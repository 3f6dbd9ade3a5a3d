//! Identifier allocator
//!
//! Mints ids for elements that have none. One allocator lives for exactly one
//! top-level parse, so two parses of the same markup name elements the same
//! way.
//!
//! Generated ids are hierarchical: `"<scope>-<type>-<n>"`, or `"<type>-<n>"`
//! when no naming scope is given. `n` counts elements of that type under that
//! scope, including ones that carry an author id, so it matches the element's
//! ordinal among same-type siblings unless a collision forced a skip.

use std::collections::{HashMap, HashSet};

/// Per-parse id allocator
#[derive(Debug, Default)]
pub struct IdAllocator {
    /// Ids present in the markup plus everything minted so far
    reserved: HashSet<String>,
    counters: HashMap<(Option<String>, String), usize>,
}

impl IdAllocator {
    /// Create an allocator that will never hand out any of `existing`
    pub fn new<I>(existing: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            reserved: existing.into_iter().collect(),
            counters: HashMap::new(),
        }
    }

    /// Mint a fresh id for an element of `element_type` under `scope`
    pub fn allocate(&mut self, element_type: &str, scope: Option<&str>) -> String {
        loop {
            let ordinal = self.next_ordinal(element_type, scope);
            let candidate = format_id(element_type, scope, ordinal);
            if self.reserved.insert(candidate.clone()) {
                return candidate;
            }
            log::debug!("id {} already taken, skipping", candidate);
        }
    }

    /// Consume an ordinal for an element that keeps its author id
    pub fn skip(&mut self, element_type: &str, scope: Option<&str>) {
        self.next_ordinal(element_type, scope);
    }

    fn next_ordinal(&mut self, element_type: &str, scope: Option<&str>) -> usize {
        let counter = self
            .counters
            .entry((scope.map(str::to_string), element_type.to_string()))
            .or_insert(0);
        let ordinal = *counter;
        *counter += 1;
        ordinal
    }
}

/// Format a generated id
pub fn format_id(element_type: &str, scope: Option<&str>, ordinal: usize) -> String {
    match scope {
        Some(parent) => format!("{}-{}-{}", parent, element_type, ordinal),
        None => format!("{}-{}", element_type, ordinal),
    }
}
