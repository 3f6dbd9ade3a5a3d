//! WASM build test
//!
//! This module tests that the exported functions work from JavaScript.
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use svg_editor_wasm::api::*;
use svg_editor_wasm::{BatchOp, ReorderDirection};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn ids(list: &[&str]) -> JsValue {
    serde_wasm_bindgen::to_value(&list).unwrap()
}

#[wasm_bindgen_test]
fn test_validate_svg() {
    let ok = validate_svg("<svg/>").unwrap();
    let ok: serde_json::Value = serde_wasm_bindgen::from_value(ok).unwrap();
    assert_eq!(ok["valid"], true);

    let bad = validate_svg("<svg>").unwrap();
    let bad: serde_json::Value = serde_wasm_bindgen::from_value(bad).unwrap();
    assert_eq!(bad["valid"], false);
    assert!(bad["error"].as_str().unwrap().starts_with("Invalid SVG syntax"));
}

#[wasm_bindgen_test]
fn test_parse_svg_returns_plain_objects() {
    let output = parse_svg("<svg><rect width=\"3\"/></svg>").unwrap();
    let output: serde_json::Value = serde_wasm_bindgen::from_value(output).unwrap();

    assert_eq!(output["components"][0]["id"], "svg-0");
    assert_eq!(output["components"][0]["children"][0]["attributes"]["width"], "3");
    assert_eq!(output["flat"][1]["parentId"], "svg-0");
    assert!(parse_svg("<svg").is_err());
}

#[wasm_bindgen_test]
fn test_markup_edits() {
    let markup = "<svg><rect id=\"a\" x=\"1\"/><rect id=\"b\"/></svg>";

    assert!(update_property(markup, "a", "x", "5").contains("x=\"5\""));
    assert_eq!(update_property(markup, "zzz", "x", "5"), markup);
    assert!(duplicate_element(markup, "a").contains("x=\"21\""));
    assert_eq!(reorder_element(markup, "b", ReorderDirection::Raise), markup);
    assert!(!remove_element(markup, "a").contains("id=\"a\""));

    let reordered = reorder_elements(markup, ids(&["a"]), ReorderDirection::Raise).unwrap();
    assert!(reordered.find("id=\"b\"").unwrap() < reordered.find("id=\"a\"").unwrap());

    let batched = batch_update(markup, ids(&["a", "b"]), "x", BatchOp::Increase, 2.0).unwrap();
    assert!(batched.contains("x=\"3\""));
    assert!(batched.contains("x=\"2\""));
}

#[wasm_bindgen_test]
fn test_common_properties_marks_mixed_as_null() {
    let markup = "<svg><rect id=\"a\" fill=\"red\"/><rect id=\"b\" fill=\"blue\"/></svg>";
    let common = common_properties(markup, ids(&["a", "b"])).unwrap();
    let common: serde_json::Value = serde_wasm_bindgen::from_value(common).unwrap();
    assert!(common["fill"].is_null());

    let none = common_properties(markup, ids(&[])).unwrap();
    assert!(none.is_null());
}

#[wasm_bindgen_test]
fn test_highlight_svg_with_default_style() {
    let markup = "<svg><rect id=\"a\"/></svg>";
    let preview = highlight_svg(markup, ids(&["a"]), None, JsValue::UNDEFINED).unwrap();
    assert!(preview.contains("outline-offset: 2px"));
}

#[wasm_bindgen_test]
fn test_session_round_trip() {
    create_session(JsValue::UNDEFINED).unwrap();

    assert!(session_select("rect1").unwrap());
    session_update_property(None, "fill", "black").unwrap();
    assert!(session_duplicate().is_ok());
    assert!(session_undo().unwrap());

    let outcome = session_set_code("<svg><rect").unwrap();
    let outcome: serde_json::Value = serde_wasm_bindgen::from_value(outcome).unwrap();
    assert_eq!(outcome["status"], "rejected");

    let snapshot = session_snapshot().unwrap();
    let snapshot: serde_json::Value = serde_wasm_bindgen::from_value(snapshot).unwrap();
    assert!(snapshot["validationError"].is_string());
    assert_eq!(snapshot["canRedo"], true);
}

#[wasm_bindgen_test]
fn test_document_store_exports() {
    let record = create_document(
        serde_wasm_bindgen::to_value(&serde_json::json!({"name": "Logo", "content": "<svg/>"})).unwrap(),
    )
    .unwrap();
    let record: serde_json::Value = serde_wasm_bindgen::from_value(record).unwrap();
    let id = record["id"].as_u64().unwrap() as u32;

    assert!(update_document(id, "<svg><rect/></svg>").is_ok());
    assert!(get_document(id).is_ok());
    assert!(get_document(9999).is_err());
    assert!(update_document(id, "<svg>").is_err());
}
