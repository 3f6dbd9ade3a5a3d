//! Markup parser
//!
//! Turns SVG markup into the component tree:
//!
//! 1. **Validate**: well-formedness check (roxmltree)
//! 2. **Read**: build the owned document arena (quick-xml)
//! 3. **Extract**: walk the first `<svg>` element depth-first, allocating ids
//!    for elements without one and writing them back onto the document
//!
//! Because allocated ids are written back, serializing the parsed document
//! and parsing it again yields the same tree.

pub mod allocator;
pub mod errors;
pub mod validate;

pub use allocator::IdAllocator;
pub use errors::{ParseError, SyntaxError};
pub use validate::validate;

use crate::document::style::StyleDeclarations;
use crate::document::{NodeId, SvgDocument};
use crate::models::{Component, ID_ATTRIBUTE, STYLE_PREFIX, TEXT_KEY};
use std::collections::BTreeMap;

/// A parsed document together with its component tree
#[derive(Clone, Debug)]
pub struct ParsedSvg {
    /// Document with every allocated id written back
    pub document: SvgDocument,
    pub components: Vec<Component>,
}

impl ParsedSvg {
    /// Markup including the allocated ids
    pub fn to_markup(&self) -> Result<String, ParseError> {
        Ok(self.document.to_markup()?)
    }
}

/// Parse markup into the component tree
///
/// Returns exactly one root (the `<svg>` element), or an empty list when the
/// markup has no `<svg>` element.
pub fn parse(markup: &str) -> Result<Vec<Component>, ParseError> {
    Ok(parse_document(markup)?.components)
}

/// Parse markup, keeping the owned document for further edits
pub fn parse_document(markup: &str) -> Result<ParsedSvg, ParseError> {
    validate(markup)?;
    let mut document = SvgDocument::parse(markup)?;

    let components = match document.root_svg() {
        Some(root) => {
            let mut allocator = IdAllocator::new(document.existing_ids());
            vec![extract(&mut document, root, None, None, &mut allocator)]
        }
        None => {
            log::debug!("no <svg> element found, empty component tree");
            Vec::new()
        }
    };

    Ok(ParsedSvg {
        document,
        components,
    })
}

/// Parse and re-serialize, filling in every missing id
pub fn serialize(markup: &str) -> Result<String, ParseError> {
    parse_document(markup)?.to_markup()
}

/// Build the component for `node`, recursing into child elements
///
/// The root and its direct children are named without a prefix; the root is
/// the implicit group. Deeper elements are prefixed with their parent's id.
fn extract(
    document: &mut SvgDocument,
    node: NodeId,
    parent_id: Option<&str>,
    scope: Option<&str>,
    allocator: &mut IdAllocator,
) -> Component {
    let (element_type, existing_id) = match document.element(node) {
        Some(element) => (element.element_type(), element.id().map(str::to_string)),
        None => (String::new(), None),
    };

    let id = match existing_id {
        Some(id) => {
            allocator.skip(&element_type, scope);
            id
        }
        None => {
            let id = allocator.allocate(&element_type, scope);
            if let Some(element) = document.element_mut(node) {
                element.set_attribute(ID_ATTRIBUTE, &id);
            }
            id
        }
    };

    let attributes = component_attributes(document, node);

    let child_scope = parent_id.map(|_| id.as_str());
    let child_nodes: Vec<NodeId> = document.child_elements(node).collect();
    let children = child_nodes
        .into_iter()
        .map(|child| extract(document, child, Some(id.as_str()), child_scope, allocator))
        .collect();

    Component {
        id,
        element_type,
        parent_id: parent_id.map(str::to_string),
        attributes,
        children,
    }
}

/// Raw attributes, decomposed `style-*` entries and leaf `_text`
fn component_attributes(document: &SvgDocument, node: NodeId) -> BTreeMap<String, String> {
    let mut attributes = BTreeMap::new();
    let Some(element) = document.element(node) else {
        return attributes;
    };

    for (name, value) in &element.attributes {
        attributes.insert(name.clone(), value.clone());
    }

    if let Some(style) = element.attribute("style") {
        for (name, value) in StyleDeclarations::parse(style).iter() {
            attributes.insert(format!("{}{}", STYLE_PREFIX, name), value.to_string());
        }
    }

    if !document.has_child_elements(node) {
        let text = document.text_content(node);
        let text = text.trim();
        if !text.is_empty() {
            attributes.insert(TEXT_KEY.to_string(), text.to_string());
        }
    }

    attributes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_naming() {
        let tree = parse("<svg><rect x=\"1\" y=\"2\" width=\"3\" height=\"4\"/></svg>").unwrap();

        assert_eq!(tree.len(), 1);
        let svg = &tree[0];
        assert_eq!(svg.element_type, "svg");
        assert_eq!(svg.id, "svg-0");
        assert_eq!(svg.parent_id, None);

        let rect = &svg.children[0];
        assert_eq!(rect.id, "rect-0");
        assert_eq!(rect.parent_id.as_deref(), Some("svg-0"));
        assert_eq!(rect.attribute("width"), Some("3"));
    }

    #[test]
    fn test_nested_ids_are_prefixed_with_parent() {
        let tree = parse("<svg><g><circle/><circle/></g><g id=\"layer\"><rect/></g></svg>").unwrap();
        let svg = &tree[0];

        assert_eq!(svg.children[0].id, "g-0");
        assert_eq!(svg.children[0].children[0].id, "g-0-circle-0");
        assert_eq!(svg.children[0].children[1].id, "g-0-circle-1");
        assert_eq!(svg.children[1].id, "layer");
        assert_eq!(svg.children[1].children[0].id, "layer-rect-0");
        assert_eq!(svg.children[1].children[0].parent_id.as_deref(), Some("layer"));
    }

    #[test]
    fn test_author_ids_win_and_consume_ordinals() {
        let tree = parse("<svg id=\"root\"><rect id=\"a\"/><rect/></svg>").unwrap();
        let svg = &tree[0];

        assert_eq!(svg.id, "root");
        assert_eq!(svg.children[0].id, "a");
        assert_eq!(svg.children[1].id, "rect-1");
    }

    #[test]
    fn test_generated_id_avoids_author_collision() {
        let tree = parse("<svg><rect/><circle id=\"rect-0\"/></svg>").unwrap();
        let ids: Vec<&str> = tree[0].iter().map(|c| c.id.as_str()).collect();

        assert_eq!(ids, vec!["svg-0", "rect-1", "rect-0"]);
    }

    #[test]
    fn test_style_and_text_are_decomposed() {
        let tree = parse(
            "<svg><text id=\"t\" style=\"fill:red; opacity:0.5\">  Hello  </text><g id=\"g\"><text>x</text></g></svg>",
        )
        .unwrap();
        let text = &tree[0].children[0];

        assert_eq!(text.attribute("style-fill"), Some("red"));
        assert_eq!(text.attribute("style-opacity"), Some("0.5"));
        assert_eq!(text.attribute("_text"), Some("Hello"));
        assert_eq!(text.attribute("style"), Some("fill:red; opacity:0.5"));

        let group = &tree[0].children[1];
        assert_eq!(group.attribute("_text"), None);
    }

    #[test]
    fn test_comments_and_instructions_are_not_components() {
        let tree = parse("<?xml version=\"1.0\"?><!-- top --><svg><!-- c --><?pi data?><rect/></svg>").unwrap();
        let types: Vec<&str> = tree[0].iter().map(|c| c.element_type.as_str()).collect();
        assert_eq!(types, vec!["svg", "rect"]);
    }

    #[test]
    fn test_no_svg_root_yields_empty_tree() {
        assert!(parse("<html><body/></html>").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_markup_is_a_syntax_error() {
        let err = parse("<svg><rect></svg>").unwrap_err();
        assert!(matches!(err, ParseError::Syntax(_)));
    }

    #[test]
    fn test_serialize_writes_allocated_ids() {
        let markup = serialize("<svg><rect/></svg>").unwrap();
        assert_eq!(markup, "<svg id=\"svg-0\"><rect id=\"rect-0\"/></svg>");
    }

    #[test]
    fn test_reparse_is_idempotent() {
        let markup = "<svg xmlns=\"http://www.w3.org/2000/svg\">\n  <g><rect style=\"fill:red\"/><text>hi</text></g>\n  <circle cx=\"5\"/>\n</svg>";
        let first = parse(markup).unwrap();
        let second = parse(&serialize(markup).unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
