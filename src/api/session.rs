//! Session API
//!
//! The editor session lives in WASM memory; JS sends intents and reads back
//! snapshots. Edits return an outcome object:
//! `{ status: "committed" | "unchanged" }` or
//! `{ status: "rejected", message }`.

use wasm_bindgen::prelude::*;
use crate::api::helpers::{deserialize, error_value, lock, serialize, timed, to_js_error};
use crate::config::EditorConfig;
use crate::models::{BatchOp, ReorderDirection};
use crate::session::{EditOutcome, EditorSession};
use crate::{wasm_info, wasm_log};
use lazy_static::lazy_static;
use std::sync::Mutex;

// WASM-owned editor session (canonical source of truth)
lazy_static! {
    static ref SESSION: Mutex<Option<EditorSession>> = Mutex::new(None);
}

/// Run `f` against the open session
fn with_session<T>(context: &str, f: impl FnOnce(&mut EditorSession) -> T) -> Result<T, JsValue> {
    let mut guard = lock(&SESSION, context)?;
    let session = guard
        .as_mut()
        .ok_or_else(|| error_value(format!("{}: no session open", context)))?;
    Ok(f(session))
}

fn outcome(context: &str, outcome: EditOutcome) -> Result<JsValue, JsValue> {
    if let EditOutcome::Rejected(message) = &outcome {
        wasm_log!("{}: rejected: {}", context, message);
    }
    serialize(&outcome, "Failed to serialize edit outcome")
}

/// Open a session, replacing any previous one
///
/// # Parameters
/// - `config_js`: optional editor configuration (every field defaulted)
///
/// # Returns
/// The initial session snapshot
#[wasm_bindgen(js_name = createSession)]
pub fn create_session(config_js: JsValue) -> Result<JsValue, JsValue> {
    let config: Option<EditorConfig> = deserialize(config_js, "Invalid editor configuration")?;
    let config = config
        .unwrap_or_default()
        .validated()
        .map_err(to_js_error("createSession"))?;

    let session = EditorSession::new(config).map_err(to_js_error("createSession"))?;
    let snapshot = session.snapshot();
    *lock(&SESSION, "createSession")? = Some(session);

    wasm_info!("createSession: {} components", snapshot.flat.len());
    serialize(&snapshot, "Failed to serialize session snapshot")
}

/// Replace the open document (a file was opened)
#[wasm_bindgen(js_name = sessionLoad)]
pub fn session_load(markup: &str) -> Result<JsValue, JsValue> {
    with_session("sessionLoad", |session| session.load(markup))?
        .map_err(to_js_error("sessionLoad"))?;
    session_snapshot()
}

/// Commit code typed in the code editor
#[wasm_bindgen(js_name = sessionSetCode)]
pub fn session_set_code(markup: &str) -> Result<JsValue, JsValue> {
    let result = timed("sessionSetCode", || {
        with_session("sessionSetCode", |session| session.set_code(markup))
    })?;
    outcome("sessionSetCode", result)
}

/// Set a property on one element, or on the whole selection when `id` is omitted
#[wasm_bindgen(js_name = sessionUpdateProperty)]
pub fn session_update_property(id: Option<String>, property: &str, value: &str) -> Result<JsValue, JsValue> {
    let result = with_session("sessionUpdateProperty", |session| match id.as_deref() {
        Some(id) => session.update_property(id, property, value),
        None => session.update_selected(property, value),
    })?;
    outcome("sessionUpdateProperty", result)
}

#[wasm_bindgen(js_name = sessionSelect)]
pub fn session_select(id: &str) -> Result<bool, JsValue> {
    with_session("sessionSelect", |session| session.select(id))
}

#[wasm_bindgen(js_name = sessionToggle)]
pub fn session_toggle(id: &str) -> Result<bool, JsValue> {
    with_session("sessionToggle", |session| session.toggle(id))
}

#[wasm_bindgen(js_name = sessionClearSelection)]
pub fn session_clear_selection() -> Result<(), JsValue> {
    with_session("sessionClearSelection", EditorSession::clear_selection)
}

#[wasm_bindgen(js_name = sessionHover)]
pub fn session_hover(id: Option<String>) -> Result<(), JsValue> {
    with_session("sessionHover", |session| session.hover(id.as_deref()))
}

/// Duplicate the selection; the copies become the new selection
#[wasm_bindgen(js_name = sessionDuplicate)]
pub fn session_duplicate() -> Result<JsValue, JsValue> {
    let result = with_session("sessionDuplicate", EditorSession::duplicate_selection)?;
    outcome("sessionDuplicate", result)
}

#[wasm_bindgen(js_name = sessionReorder)]
pub fn session_reorder(direction: ReorderDirection) -> Result<JsValue, JsValue> {
    let result = with_session("sessionReorder", |session| session.reorder_selection(direction))?;
    outcome("sessionReorder", result)
}

#[wasm_bindgen(js_name = sessionBatchUpdate)]
pub fn session_batch_update(property: &str, op: BatchOp, amount: f64) -> Result<JsValue, JsValue> {
    let result = with_session("sessionBatchUpdate", |session| {
        session.batch_update(property, op, amount)
    })?;
    outcome("sessionBatchUpdate", result)
}

/// Shared properties of the selection (`null` per property when mixed)
#[wasm_bindgen(js_name = sessionCommonProperties)]
pub fn session_common_properties() -> Result<JsValue, JsValue> {
    let common = with_session("sessionCommonProperties", |session| session.common_properties())?;
    serialize(&common, "Failed to serialize common properties")
}

/// Copy the selection; returns the clipboard size
#[wasm_bindgen(js_name = sessionCopy)]
pub fn session_copy() -> Result<usize, JsValue> {
    with_session("sessionCopy", EditorSession::copy_selection)
}

#[wasm_bindgen(js_name = sessionPaste)]
pub fn session_paste() -> Result<JsValue, JsValue> {
    let result = with_session("sessionPaste", EditorSession::paste)?;
    outcome("sessionPaste", result)
}

#[wasm_bindgen(js_name = sessionRemove)]
pub fn session_remove() -> Result<JsValue, JsValue> {
    let result = with_session("sessionRemove", EditorSession::remove_selection)?;
    outcome("sessionRemove", result)
}

#[wasm_bindgen(js_name = sessionUndo)]
pub fn session_undo() -> Result<bool, JsValue> {
    with_session("sessionUndo", EditorSession::undo)
}

#[wasm_bindgen(js_name = sessionRedo)]
pub fn session_redo() -> Result<bool, JsValue> {
    with_session("sessionRedo", EditorSession::redo)
}

#[wasm_bindgen(js_name = sessionToggleGrid)]
pub fn session_toggle_grid() -> Result<bool, JsValue> {
    with_session("sessionToggleGrid", EditorSession::toggle_grid)
}

/// Highlighted markup for the preview pane
#[wasm_bindgen(js_name = sessionPreview)]
pub fn session_preview() -> Result<String, JsValue> {
    with_session("sessionPreview", |session| session.preview_markup())
}

#[wasm_bindgen(js_name = sessionSnapshot)]
pub fn session_snapshot() -> Result<JsValue, JsValue> {
    let snapshot = with_session("sessionSnapshot", |session| session.snapshot())?;
    serialize(&snapshot, "Failed to serialize session snapshot")
}
