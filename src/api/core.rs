//! Stateless document operations
//!
//! Every function takes markup and returns markup or a view of it. Edits
//! never throw for an unresolved id: the input comes back unchanged, which
//! the UI treats as a no-op.

use wasm_bindgen::prelude::*;
use crate::api::helpers::{deserialize, serialize, timed, to_js_error};
use crate::api::types::{ParseOutput, ValidationResult};
use crate::config::HighlightStyle;
use crate::models::{BatchOp, ReorderDirection};
use crate::{mutation, parse, tree};
use crate::{wasm_info, wasm_log};

/// Check markup against the validation gate
///
/// # Returns
/// `{ valid: true }` or `{ valid: false, error: "Invalid SVG syntax: ..." }`
#[wasm_bindgen(js_name = validateSvg)]
pub fn validate_svg(markup: &str) -> Result<JsValue, JsValue> {
    let result = match parse::validate(markup) {
        Ok(()) => ValidationResult {
            valid: true,
            error: None,
        },
        Err(e) => {
            wasm_log!("validateSvg: {}", e);
            ValidationResult {
                valid: false,
                error: Some(e.to_string()),
            }
        }
    };
    serialize(&result, "Failed to serialize validation result")
}

/// Parse markup into the component tree and its flat list
#[wasm_bindgen(js_name = parseSvg)]
pub fn parse_svg(markup: &str) -> Result<JsValue, JsValue> {
    let components = timed("parseSvg", || parse::parse(markup)).map_err(to_js_error("parseSvg"))?;
    let flat = tree::flatten(&components);
    wasm_log!("parseSvg: {} components", flat.len());

    serialize(&ParseOutput { components, flat }, "Failed to serialize components")
}

/// Parse and re-serialize with every allocated id written into the markup
#[wasm_bindgen(js_name = serializeSvg)]
pub fn serialize_svg(markup: &str) -> Result<String, JsValue> {
    parse::serialize(markup).map_err(to_js_error("serializeSvg"))
}

/// Pre-order flat list, optionally carrying attributes
#[wasm_bindgen(js_name = flattenSvg)]
pub fn flatten_svg(markup: &str, with_attributes: bool) -> Result<JsValue, JsValue> {
    let components = parse::parse(markup).map_err(to_js_error("flattenSvg"))?;
    let flat = if with_attributes {
        tree::flatten_with_attributes(&components)
    } else {
        tree::flatten(&components)
    };
    serialize(&flat, "Failed to serialize flat list")
}

/// Resolve an id (exact, then hierarchical fallback)
///
/// # Returns
/// The component, or `null` when nothing resolves
#[wasm_bindgen(js_name = findComponent)]
pub fn find_component(markup: &str, id: &str) -> Result<JsValue, JsValue> {
    let components = parse::parse(markup).map_err(to_js_error("findComponent"))?;
    let found = tree::find_by_id(&components, id);
    if found.is_none() {
        wasm_log!("findComponent: '{}' does not resolve", id);
    }
    serialize(&found, "Failed to serialize component")
}

#[wasm_bindgen(js_name = updateProperty)]
pub fn update_property(markup: &str, id: &str, property: &str, value: &str) -> String {
    wasm_log!("updateProperty: id={}, {}={:?}", id, property, value);
    mutation::update_property(markup, id, property, value)
}

#[wasm_bindgen(js_name = duplicateElement)]
pub fn duplicate_element(markup: &str, id: &str) -> String {
    wasm_log!("duplicateElement: id={}", id);
    mutation::duplicate(markup, id)
}

#[wasm_bindgen(js_name = reorderElement)]
pub fn reorder_element(markup: &str, id: &str, direction: ReorderDirection) -> String {
    wasm_log!("reorderElement: id={}, {:?}", id, direction);
    mutation::reorder(markup, id, direction)
}

/// Reorder several elements, in selection order
///
/// # Parameters
/// - `ids_js`: JavaScript array of ids
#[wasm_bindgen(js_name = reorderElements)]
pub fn reorder_elements(markup: &str, ids_js: JsValue, direction: ReorderDirection) -> Result<String, JsValue> {
    let ids: Vec<String> = deserialize(ids_js, "Invalid id list")?;
    wasm_log!("reorderElements: {} ids, {:?}", ids.len(), direction);
    Ok(mutation::reorder_many(markup, &ids, direction))
}

#[wasm_bindgen(js_name = removeElement)]
pub fn remove_element(markup: &str, id: &str) -> String {
    wasm_log!("removeElement: id={}", id);
    mutation::remove(markup, id)
}

/// Shared properties of a multi-selection
///
/// # Returns
/// An object mapping each shared property to its value, or to `null` when the
/// selected elements disagree; `null` when nothing in the selection resolves
#[wasm_bindgen(js_name = commonProperties)]
pub fn common_properties(markup: &str, ids_js: JsValue) -> Result<JsValue, JsValue> {
    let ids: Vec<String> = deserialize(ids_js, "Invalid id list")?;
    let components = parse::parse(markup).map_err(to_js_error("commonProperties"))?;
    let common = mutation::common_properties(&ids, &components);
    serialize(&common, "Failed to serialize common properties")
}

/// Numeric increase/decrease of one property across several elements
#[wasm_bindgen(js_name = batchUpdate)]
pub fn batch_update(
    markup: &str,
    ids_js: JsValue,
    property: &str,
    op: BatchOp,
    amount: f64,
) -> Result<String, JsValue> {
    let ids: Vec<String> = deserialize(ids_js, "Invalid id list")?;
    wasm_info!("batchUpdate: {} ids, {} {:?} {}", ids.len(), property, op, amount);
    Ok(mutation::batch_update(markup, &ids, property, op, amount))
}

/// Markup for the preview pane with selection and hover outlines
///
/// # Parameters
/// - `selected_js`: JavaScript array of selected ids
/// - `hovered`: hovered id, if any
/// - `style_js`: optional outline style overrides
#[wasm_bindgen(js_name = highlightSvg)]
pub fn highlight_svg(
    markup: &str,
    selected_js: JsValue,
    hovered: Option<String>,
    style_js: JsValue,
) -> Result<String, JsValue> {
    let selected: Vec<String> = deserialize(selected_js, "Invalid id list")?;
    let style: Option<HighlightStyle> = deserialize(style_js, "Invalid highlight style")?;
    Ok(mutation::highlight(
        markup,
        &selected,
        hovered.as_deref(),
        &style.unwrap_or_default(),
    ))
}
