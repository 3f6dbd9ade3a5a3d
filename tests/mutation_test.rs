// Mutation engine through the public API

use svg_editor_wasm::mutation::{try_duplicate, try_update_property};
use svg_editor_wasm::{
    batch_update, common_properties, duplicate, find_by_id, parse, remove, reorder, BatchOp,
    EditorConfig, MutationError, ReorderDirection,
};

const SCENE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg">
  <rect id="a" x="10" y="10" width="20" height="20" fill="red"/>
  <circle id="b" cx="50" cy="50" r="10" fill="red"/>
  <g id="layer">
    <rect x="0" y="0" width="5" height="5"/>
  </g>
</svg>"#;

fn attribute(markup: &str, id: &str, key: &str) -> Option<String> {
    let tree = parse(markup).expect("mutation output must parse");
    find_by_id(&tree, id).and_then(|c| c.attribute(key).map(str::to_string))
}

fn root_child_ids(markup: &str) -> Vec<String> {
    parse(markup).unwrap()[0].children.iter().map(|c| c.id.clone()).collect()
}

#[test]
fn test_every_edit_output_parses() {
    let edits = [
        svg_editor_wasm::update_property(SCENE, "a", "fill", "blue"),
        svg_editor_wasm::update_property(SCENE, "a", "style-stroke", "black"),
        svg_editor_wasm::update_property(SCENE, "layer-rect-0", "_text", "<oops>"),
        duplicate(SCENE, "b"),
        reorder(SCENE, "a", ReorderDirection::Raise),
        remove(SCENE, "layer"),
    ];
    for markup in &edits {
        assert!(parse(markup).is_ok(), "invalid output: {}", markup);
    }
}

#[test]
fn test_unresolved_id_is_byte_identical() {
    assert_eq!(svg_editor_wasm::update_property(SCENE, "zzz", "fill", "blue"), SCENE);
    assert_eq!(duplicate(SCENE, "zzz"), SCENE);
    assert_eq!(reorder(SCENE, "zzz", ReorderDirection::Lower), SCENE);
    assert_eq!(remove(SCENE, "zzz"), SCENE);

    let err = try_update_property(SCENE, "zzz", "fill", "blue").unwrap_err();
    assert!(matches!(err, MutationError::UnresolvedId(ref id) if id == "zzz"));
    assert!(err.is_soft_miss());
}

#[test]
fn test_duplicate_offset_and_new_id() {
    let updated = duplicate(SCENE, "a");
    let tree = parse(&updated).unwrap();

    let ids = root_child_ids(&updated);
    assert_eq!(ids.len(), 4);
    let copy = find_by_id(&tree, &ids[3]).unwrap();
    assert_eq!(copy.element_type, "rect");
    assert_ne!(copy.id, "a");
    assert_eq!(copy.attribute("x"), Some("30"));
    assert_eq!(copy.attribute("y"), Some("30"));
    assert_eq!(copy.attribute("fill"), Some("red"));
}

#[test]
fn test_duplicate_root_reports_reason() {
    let err = try_duplicate(SCENE, "svg-0", &EditorConfig::default()).unwrap_err();
    assert!(matches!(err, MutationError::RootHasNoParent(_)));
}

#[test]
fn test_reorder_boundaries() {
    assert_eq!(reorder(SCENE, "layer", ReorderDirection::Raise), SCENE);
    assert_eq!(reorder(SCENE, "a", ReorderDirection::Lower), SCENE);

    let raised = reorder(SCENE, "b", ReorderDirection::Raise);
    assert_eq!(root_child_ids(&raised), vec!["a", "layer", "b"]);
}

#[test]
fn test_stale_hierarchical_id_is_resolved() {
    // the rect was renamed to "inner" after the UI saw "layer-rect-0"
    let renamed = svg_editor_wasm::update_property(SCENE, "layer-rect-0", "id", "inner");
    assert_eq!(attribute(&renamed, "inner", "width").as_deref(), Some("5"));

    let updated = svg_editor_wasm::update_property(&renamed, "layer-rect-0", "width", "7");
    assert_eq!(attribute(&updated, "inner", "width").as_deref(), Some("7"));
}

#[test]
fn test_common_properties_sentinel() {
    let tree = parse(SCENE).unwrap();
    let selection = vec!["a".to_string(), "b".to_string()];
    let common = common_properties(&selection, &tree).unwrap();

    assert_eq!(common.get("fill"), Some(&Some("red".to_string())));
    assert_eq!(common.get("id"), Some(&None));
    assert!(!common.contains_key("width"));
    assert!(!common.contains_key("cx"));
}

#[test]
fn test_batch_update_clamps_at_zero() {
    let selection = vec!["a".to_string(), "layer-rect-0".to_string()];
    let updated = batch_update(SCENE, &selection, "width", BatchOp::Decrease, 10.0);

    assert_eq!(attribute(&updated, "a", "width").as_deref(), Some("10"));
    assert_eq!(attribute(&updated, "layer-rect-0", "width").as_deref(), Some("0"));
}

#[test]
fn test_text_update_escapes_markup() {
    let markup = "<svg><text id=\"t\">x</text></svg>";
    let updated = svg_editor_wasm::update_property(markup, "t", "_text", "1 < 2 & 3");

    assert!(updated.contains("1 &lt; 2 &amp; 3"));
    assert_eq!(attribute(&updated, "t", "_text").as_deref(), Some("1 < 2 & 3"));
}
