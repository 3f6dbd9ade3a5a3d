//! Property edits
//!
//! One entry point covers the three kinds of property the inspector shows:
//! `_text` replaces text content, `style-<name>` edits one inline-style
//! declaration, anything else is a raw attribute (empty value removes it).

use super::{absorb, finish, resolve, MutationError};
use crate::document::style::StyleDeclarations;
use crate::document::{NodeId, SvgDocument};
use crate::models::{STYLE_PREFIX, TEXT_KEY};

/// Set a property on the element `id` resolves to
///
/// Returns the input unchanged when the id does not resolve or the edit
/// would produce invalid markup.
pub fn update_property(markup: &str, id: &str, property: &str, value: &str) -> String {
    absorb(
        "update_property",
        markup,
        try_update_property(markup, id, property, value),
    )
}

pub fn try_update_property(
    markup: &str,
    id: &str,
    property: &str,
    value: &str,
) -> Result<String, MutationError> {
    let mut target = resolve(markup, id)?;
    apply_property(&mut target.parsed.document, target.node, property, value);
    finish(&target.parsed.document)
}

/// Apply a property edit to an arena node
pub(crate) fn apply_property(document: &mut SvgDocument, node: NodeId, property: &str, value: &str) {
    if property == TEXT_KEY {
        document.set_text_content(node, value);
        return;
    }

    let Some(element) = document.element_mut(node) else {
        return;
    };

    if let Some(name) = property.strip_prefix(STYLE_PREFIX) {
        let mut style = StyleDeclarations::parse(element.attribute("style").unwrap_or_default());
        style.set(name, value);
        if style.is_empty() {
            element.remove_attribute("style");
        } else {
            element.set_attribute("style", &style.to_string());
        }
    } else if value.is_empty() {
        element.remove_attribute(property);
    } else {
        element.set_attribute(property, value);
    }
}
