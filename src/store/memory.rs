//! In-memory document store

use super::{DocumentStore, DocumentSummary, NewDocument, StoreError, SvgDocumentRecord};
use crate::parse::validate;
use chrono::Utc;
use std::collections::HashMap;

/// Documents held in a map, with serial ids starting at 1
#[derive(Debug, Clone)]
pub struct MemoryStore {
    documents: HashMap<u64, SvgDocumentRecord>,
    next_id: u64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            documents: HashMap::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentStore for MemoryStore {
    fn list(&self) -> Vec<DocumentSummary> {
        let mut summaries: Vec<DocumentSummary> =
            self.documents.values().map(DocumentSummary::from).collect();
        summaries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));
        summaries
    }

    fn get(&self, id: u64) -> Result<SvgDocumentRecord, StoreError> {
        self.documents.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    fn create(&mut self, document: NewDocument) -> Result<SvgDocumentRecord, StoreError> {
        let name = document.name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        validate(&document.content)?;

        let id = self.next_id;
        self.next_id += 1;

        let record = SvgDocumentRecord {
            id,
            name: name.to_string(),
            content: document.content,
            updated_at: Utc::now(),
        };
        log::debug!("store: created document {} '{}'", id, record.name);
        self.documents.insert(id, record.clone());
        Ok(record)
    }

    fn update(&mut self, id: u64, content: &str) -> Result<SvgDocumentRecord, StoreError> {
        validate(content)?;
        let record = self.documents.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        record.content = content.to_string();
        record.updated_at = Utc::now();
        Ok(record.clone())
    }
}
