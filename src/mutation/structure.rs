//! Structural edits: duplicate, reorder, remove, paste
//!
//! New elements are appended without an `id`; they receive one from the
//! allocator on the next parse, like any other element the author left
//! unnamed.

use super::{absorb, finish, resolve, MutationError, Target};
use crate::config::EditorConfig;
use crate::document::{Element, NodeId, SvgDocument};
use crate::models::{CopiedElement, ReorderDirection, ID_ATTRIBUTE, STYLE_PREFIX, TEXT_KEY};
use crate::parse::parse_document;
use crate::utils::{canonical_tag_name, format_number, parse_number};
use std::collections::BTreeMap;

/// Duplicate an element with the default offset of 20 on `x`, `y`, `cx`, `cy`
pub fn duplicate(markup: &str, id: &str) -> String {
    duplicate_with(markup, id, &EditorConfig::default())
}

/// Duplicate using the offset settings from `config`
pub fn duplicate_with(markup: &str, id: &str, config: &EditorConfig) -> String {
    absorb("duplicate", markup, try_duplicate(markup, id, config))
}

pub fn try_duplicate(markup: &str, id: &str, config: &EditorConfig) -> Result<String, MutationError> {
    let Target { mut parsed, node } = resolve(markup, id)?;
    let document = &mut parsed.document;
    let parent = parent_of(document, node, id)?;

    let mut copy = copy_of(document, node);
    for name in &config.offset_attributes {
        if let Some(value) = copy.attributes.get_mut(name) {
            if let Some(number) = parse_number(value) {
                *value = format_number(number + config.duplicate_offset);
            }
        }
    }

    log::debug!("duplicate: '{}' as new <{}>", id, copy.element_type);
    insert_copied(document, parent, &copy);
    finish(document)
}

/// Swap an element one step up or down among its sibling elements
///
/// At either end the input comes back unchanged.
pub fn reorder(markup: &str, id: &str, direction: ReorderDirection) -> String {
    absorb("reorder", markup, try_reorder(markup, id, direction))
}

pub fn try_reorder(markup: &str, id: &str, direction: ReorderDirection) -> Result<String, MutationError> {
    let Target { mut parsed, node } = resolve(markup, id)?;
    let document = &mut parsed.document;
    parent_of(document, node, id)?;

    if !document.swap_with_sibling(node, direction) {
        log::debug!("reorder: '{}' already at the {:?} boundary", id, direction);
        return Ok(markup.to_string());
    }
    finish(document)
}

/// Reorder each id in turn; a failing id leaves the others unaffected
pub fn reorder_many(markup: &str, ids: &[String], direction: ReorderDirection) -> String {
    ids.iter()
        .fold(markup.to_string(), |current, id| reorder(&current, id, direction))
}

/// Delete an element and its subtree; the svg root cannot be removed
pub fn remove(markup: &str, id: &str) -> String {
    absorb("remove", markup, try_remove(markup, id))
}

pub fn try_remove(markup: &str, id: &str) -> Result<String, MutationError> {
    let Target { mut parsed, node } = resolve(markup, id)?;
    let document = &mut parsed.document;
    parent_of(document, node, id)?;

    document.detach(node);
    finish(document)
}

/// Append a clipboard entry under `parent_id`, or under the svg root
pub fn paste(markup: &str, parent_id: Option<&str>, copied: &CopiedElement) -> String {
    absorb("paste", markup, try_paste(markup, parent_id, copied))
}

pub fn try_paste(
    markup: &str,
    parent_id: Option<&str>,
    copied: &CopiedElement,
) -> Result<String, MutationError> {
    let (mut parsed, parent) = match parent_id {
        Some(id) => {
            let Target { parsed, node } = resolve(markup, id)?;
            (parsed, node)
        }
        None => {
            let parsed = parse_document(markup)?;
            let root = parsed
                .document
                .root_svg()
                .ok_or_else(|| MutationError::UnresolvedId("svg".to_string()))?;
            (parsed, root)
        }
    };

    insert_copied(&mut parsed.document, parent, copied);
    finish(&parsed.document)
}

/// Clipboard entry for the element `id` resolves to
pub fn copy_element(markup: &str, id: &str) -> Option<CopiedElement> {
    match resolve(markup, id) {
        Ok(Target { parsed, node }) => Some(copy_of(&parsed.document, node)),
        Err(err) => {
            log::debug!("copy_element: {}", err);
            None
        }
    }
}

/// Parent of a resolved element, refusing the svg root
fn parent_of(document: &SvgDocument, node: NodeId, id: &str) -> Result<NodeId, MutationError> {
    if document.root_svg() == Some(node) {
        return Err(MutationError::RootHasNoParent(id.to_string()));
    }
    document
        .parent(node)
        .ok_or_else(|| MutationError::RootHasNoParent(id.to_string()))
}

/// Type, attributes minus `id`, and the text of a leaf element
fn copy_of(document: &SvgDocument, node: NodeId) -> CopiedElement {
    let mut attributes = BTreeMap::new();
    let mut element_type = String::new();

    if let Some(element) = document.element(node) {
        element_type = element.element_type();
        for (name, value) in &element.attributes {
            if name != ID_ATTRIBUTE {
                attributes.insert(name.clone(), value.clone());
            }
        }
    }

    if !document.has_child_elements(node) {
        let text = document.text_content(node);
        let text = text.trim();
        if !text.is_empty() {
            attributes.insert(TEXT_KEY.to_string(), text.to_string());
        }
    }

    CopiedElement {
        element_type,
        attributes,
    }
}

/// Materialize a clipboard entry as the last child of `parent`
fn insert_copied(document: &mut SvgDocument, parent: NodeId, copied: &CopiedElement) -> NodeId {
    let mut element = Element::new(canonical_tag_name(&copied.element_type));
    for (name, value) in &copied.attributes {
        if name == TEXT_KEY || name == ID_ATTRIBUTE || name.starts_with(STYLE_PREFIX) {
            continue;
        }
        element.set_attribute(name, value);
    }

    let node = document.append_element(parent, element);
    if let Some(text) = copied.text() {
        document.append_text(node, text);
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Component;
    use crate::parse::parse;

    fn root_children(markup: &str) -> Vec<Component> {
        parse(markup).unwrap().remove(0).children
    }

    fn child_ids(markup: &str) -> Vec<String> {
        root_children(markup).into_iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_duplicate_offsets_position() {
        let markup = "<svg><rect id=\"r\" x=\"10\" y=\"10\" width=\"5\"/></svg>";
        let updated = duplicate(markup, "r");

        let children = root_children(&updated);
        assert_eq!(children.len(), 2);
        let copy = &children[1];
        assert_eq!(copy.element_type, "rect");
        assert_ne!(copy.id, "r");
        assert_eq!(copy.attribute("x"), Some("30"));
        assert_eq!(copy.attribute("y"), Some("30"));
        assert_eq!(copy.attribute("width"), Some("5"));
        assert_eq!(children[0].attribute("x"), Some("10"));
    }

    #[test]
    fn test_duplicate_skips_non_numeric_positions() {
        let markup = "<svg><circle id=\"c\" cx=\"50%\" cy=\"4\"/></svg>";
        let copy = root_children(&duplicate(markup, "c")).remove(1);

        assert_eq!(copy.attribute("cx"), Some("50%"));
        assert_eq!(copy.attribute("cy"), Some("24"));
    }

    #[test]
    fn test_duplicate_lands_under_same_parent() {
        let markup = "<svg><g id=\"g\"><rect id=\"r\"/></g><circle/></svg>";
        let children = root_children(&duplicate(markup, "r"));

        assert_eq!(children.len(), 2);
        assert_eq!(children[0].children.len(), 2);
        assert_eq!(children[0].children[1].id, "g-rect-1");
    }

    #[test]
    fn test_duplicate_keeps_text_content() {
        let markup = "<svg><text id=\"t\" x=\"1\">Label</text></svg>";
        let copy = root_children(&duplicate(markup, "t")).remove(1);
        assert_eq!(copy.attribute("_text"), Some("Label"));
        assert_eq!(copy.attribute("x"), Some("21"));
    }

    #[test]
    fn test_duplicate_restores_tag_case() {
        let markup = "<svg><defs id=\"d\"><linearGradient id=\"lg\"/></defs></svg>";
        let updated = duplicate(markup, "lg");
        assert_eq!(updated.matches("<linearGradient").count(), 2);
    }

    #[test]
    fn test_duplicate_root_is_no_op() {
        let markup = "<svg><rect/></svg>";
        assert_eq!(duplicate(markup, "svg-0"), markup);
        assert!(matches!(
            try_duplicate(markup, "svg-0", &EditorConfig::default()),
            Err(MutationError::RootHasNoParent(_))
        ));
    }

    #[test]
    fn test_duplicate_uses_configured_offset() {
        let config = EditorConfig {
            duplicate_offset: 5.0,
            offset_attributes: vec!["x".to_string()],
            ..EditorConfig::default()
        };
        let markup = "<svg><rect id=\"r\" x=\"1\" y=\"1\"/></svg>";
        let copy = root_children(&duplicate_with(markup, "r", &config)).remove(1);

        assert_eq!(copy.attribute("x"), Some("6"));
        assert_eq!(copy.attribute("y"), Some("1"));
    }

    #[test]
    fn test_reorder_raise_and_lower() {
        let markup = "<svg><rect id=\"a\"/><rect id=\"b\"/><rect id=\"c\"/></svg>";

        assert_eq!(child_ids(&reorder(markup, "a", ReorderDirection::Raise)), vec!["b", "a", "c"]);
        assert_eq!(child_ids(&reorder(markup, "c", ReorderDirection::Lower)), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_reorder_boundaries_return_input() {
        let markup = "<svg><rect id=\"a\"/><rect id=\"b\"/></svg>";
        assert_eq!(reorder(markup, "b", ReorderDirection::Raise), markup);
        assert_eq!(reorder(markup, "a", ReorderDirection::Lower), markup);
    }

    #[test]
    fn test_reorder_keeps_formatting_slots() {
        let markup = "<svg>\n  <rect id=\"a\"/>\n  <circle id=\"b\"/>\n</svg>";
        let updated = reorder(markup, "a", ReorderDirection::Raise);
        assert_eq!(updated, "<svg id=\"svg-0\">\n  <circle id=\"b\"/>\n  <rect id=\"a\"/>\n</svg>");
    }

    #[test]
    fn test_reorder_many_applies_in_order() {
        let markup = "<svg><rect id=\"a\"/><rect id=\"b\"/><rect id=\"c\"/></svg>";
        let ids = vec!["b".to_string(), "missing".to_string(), "a".to_string()];
        let updated = reorder_many(markup, &ids, ReorderDirection::Raise);

        // b raises past c, then a raises past c
        assert_eq!(child_ids(&updated), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_remove_element() {
        let markup = "<svg><rect id=\"a\"/><g id=\"g\"><rect/></g></svg>";
        assert_eq!(child_ids(&remove(markup, "g")), vec!["a"]);
        assert_eq!(remove(markup, "svg-0"), markup);
    }

    #[test]
    fn test_copy_element_omits_id() {
        let markup = "<svg><text id=\"t\" x=\"3\" style=\"fill:red\">Hi</text></svg>";
        let copied = copy_element(markup, "t").unwrap();

        assert_eq!(copied.element_type, "text");
        assert_eq!(copied.attributes.get("id"), None);
        assert_eq!(copied.attributes.get("style").map(String::as_str), Some("fill:red"));
        assert_eq!(copied.text(), Some("Hi"));
        assert!(copy_element(markup, "nope").is_none());
    }

    #[test]
    fn test_paste_under_root_and_group() {
        let markup = "<svg><g id=\"g\"/><rect id=\"r\" x=\"1\"/></svg>";
        let copied = copy_element(markup, "r").unwrap();

        let at_root = root_children(&paste(markup, None, &copied));
        assert_eq!(at_root.len(), 3);
        assert_eq!(at_root[2].attribute("x"), Some("1"));

        let in_group = root_children(&paste(markup, Some("g"), &copied));
        assert_eq!(in_group[0].children.len(), 1);
        assert_eq!(in_group[0].children[0].id, "g-rect-0");
    }

    #[test]
    fn test_paste_ignores_decomposed_keys() {
        let mut attributes = BTreeMap::new();
        attributes.insert("id".to_string(), "stale".to_string());
        attributes.insert("style-fill".to_string(), "red".to_string());
        attributes.insert("width".to_string(), "2".to_string());
        let copied = CopiedElement {
            element_type: "rect".to_string(),
            attributes,
        };

        let pasted = root_children(&paste("<svg/>", None, &copied)).remove(0);
        assert_eq!(pasted.id, "rect-0");
        assert_eq!(pasted.attribute("style-fill"), None);
        assert_eq!(pasted.attribute("width"), Some("2"));
    }
}
