//! Document persistence
//!
//! Saved documents are named SVG markups. The editor only talks to the
//! `DocumentStore` trait, so the backing store can be swapped (in-memory for
//! the browser build and tests, anything else behind the same interface).

pub mod memory;

pub use memory::MemoryStore;

use crate::parse::SyntaxError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Store failures
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Document not found: {0}")]
    NotFound(u64),

    #[error("Document name must not be empty")]
    EmptyName,

    #[error(transparent)]
    InvalidContent(#[from] SyntaxError),
}

/// A saved document
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SvgDocumentRecord {
    pub id: u64,
    pub name: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

/// Listing entry, without the markup
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    pub id: u64,
    pub name: String,
    pub updated_at: DateTime<Utc>,
}

impl From<&SvgDocumentRecord> for DocumentSummary {
    fn from(record: &SvgDocumentRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            updated_at: record.updated_at,
        }
    }
}

/// Payload for creating a document
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NewDocument {
    pub name: String,
    pub content: String,
}

/// CRUD over saved documents
pub trait DocumentStore {
    /// All documents, most recently updated first
    fn list(&self) -> Vec<DocumentSummary>;

    fn get(&self, id: u64) -> Result<SvgDocumentRecord, StoreError>;

    /// Save a new document; the name is trimmed and the content must parse
    fn create(&mut self, document: NewDocument) -> Result<SvgDocumentRecord, StoreError>;

    /// Replace a document's content
    fn update(&mut self, id: u64, content: &str) -> Result<SvgDocumentRecord, StoreError>;
}
