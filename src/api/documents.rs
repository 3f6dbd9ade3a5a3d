//! Saved-document API
//!
//! Named documents kept in WASM memory through the `DocumentStore` interface.

use wasm_bindgen::prelude::*;
use crate::api::helpers::{deserialize, lock, serialize, to_js_error};
use crate::store::{DocumentStore, MemoryStore, NewDocument};
use crate::wasm_info;
use lazy_static::lazy_static;
use std::sync::Mutex;

lazy_static! {
    static ref STORE: Mutex<MemoryStore> = Mutex::new(MemoryStore::new());
}

/// All saved documents, most recently updated first
#[wasm_bindgen(js_name = listDocuments)]
pub fn list_documents() -> Result<js_sys::Array, JsValue> {
    let summaries = lock(&STORE, "listDocuments")?.list();
    let result = js_sys::Array::new();
    for summary in &summaries {
        result.push(&serialize(summary, "Failed to serialize document summary")?);
    }
    Ok(result)
}

#[wasm_bindgen(js_name = getDocument)]
pub fn get_document(id: u32) -> Result<JsValue, JsValue> {
    let record = lock(&STORE, "getDocument")?
        .get(u64::from(id))
        .map_err(to_js_error("getDocument"))?;
    serialize(&record, "Failed to serialize document")
}

/// Save a new document
///
/// # Parameters
/// - `document_js`: `{ name, content }`
#[wasm_bindgen(js_name = createDocument)]
pub fn create_document(document_js: JsValue) -> Result<JsValue, JsValue> {
    let document: NewDocument = deserialize(document_js, "Invalid document")?;
    let record = lock(&STORE, "createDocument")?
        .create(document)
        .map_err(to_js_error("createDocument"))?;
    wasm_info!("createDocument: saved #{} '{}'", record.id, record.name);
    serialize(&record, "Failed to serialize document")
}

#[wasm_bindgen(js_name = updateDocument)]
pub fn update_document(id: u32, content: &str) -> Result<JsValue, JsValue> {
    let record = lock(&STORE, "updateDocument")?
        .update(u64::from(id), content)
        .map_err(to_js_error("updateDocument"))?;
    serialize(&record, "Failed to serialize document")
}
