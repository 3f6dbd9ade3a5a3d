//! Preview highlighting
//!
//! Injects outline declarations into the inline style of selected and
//! hovered elements. The result is for display only and never committed.

use super::{absorb, finish, locate, MutationError};
use crate::config::HighlightStyle;
use crate::document::style::StyleDeclarations;
use crate::document::{NodeId, SvgDocument};
use crate::parse::parse_document;

/// Markup with outlines on the selected and hovered elements
///
/// Ids that do not resolve are skipped. A hovered element that is also
/// selected keeps the selected outline.
pub fn highlight(markup: &str, selected: &[String], hovered: Option<&str>, style: &HighlightStyle) -> String {
    if selected.is_empty() && hovered.is_none() {
        return markup.to_string();
    }
    absorb("highlight", markup, try_highlight(markup, selected, hovered, style))
}

pub fn try_highlight(
    markup: &str,
    selected: &[String],
    hovered: Option<&str>,
    style: &HighlightStyle,
) -> Result<String, MutationError> {
    let mut parsed = parse_document(markup)?;

    let selected_nodes: Vec<NodeId> = selected.iter().filter_map(|id| locate(&parsed, id)).collect();
    let hovered_node = hovered
        .and_then(|id| locate(&parsed, id))
        .filter(|node| !selected_nodes.contains(node));

    for &node in &selected_nodes {
        outline(&mut parsed.document, node, &style.selected_outline, &style.outline_offset);
    }
    if let Some(node) = hovered_node {
        outline(&mut parsed.document, node, &style.hovered_outline, &style.outline_offset);
    }

    finish(&parsed.document)
}

fn outline(document: &mut SvgDocument, node: NodeId, outline: &str, offset: &str) {
    let Some(element) = document.element_mut(node) else {
        return;
    };
    let mut declarations = StyleDeclarations::parse(element.attribute("style").unwrap_or_default());
    declarations.set("outline", outline);
    declarations.set("outline-offset", offset);
    element.set_attribute("style", &declarations.to_string());
}
