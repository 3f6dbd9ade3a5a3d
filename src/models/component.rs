//! Component tree data model
//!
//! A `Component` is the parsed, UI-facing view of one markup element. The tree
//! is rebuilt from markup on every accepted change and never mutated in place.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Markup attribute carrying element identity
pub const ID_ATTRIBUTE: &str = "id";

/// Synthesized attribute key holding the trimmed text of a leaf element
pub const TEXT_KEY: &str = "_text";

/// Prefix of synthesized attribute keys for inline-style declarations
pub const STYLE_PREFIX: &str = "style-";

/// A node in the parsed component tree
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Unique within one parsed document (author-supplied or allocated)
    pub id: String,

    /// Lower-cased element tag name
    #[serde(rename = "type")]
    pub element_type: String,

    /// Id of the structural parent, `None` for the document root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    /// Raw attributes plus `style-*` and `_text` entries
    pub attributes: BTreeMap<String, String>,

    /// Direct children in document order
    #[serde(default)]
    pub children: Vec<Component>,
}

impl Component {
    /// Look up an attribute (raw or synthesized)
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Pre-order iterator over this component and all descendants
    pub fn iter(&self) -> ComponentIter<'_> {
        ComponentIter { stack: vec![self] }
    }
}

/// Pre-order walk over a component subtree
pub struct ComponentIter<'a> {
    stack: Vec<&'a Component>,
}

impl<'a> Iterator for ComponentIter<'a> {
    type Item = &'a Component;

    fn next(&mut self) -> Option<Self::Item> {
        let component = self.stack.pop()?;
        self.stack.extend(component.children.iter().rev());
        Some(component)
    }
}

/// Flat projection of a component, used by list-based UIs
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FlatComponent {
    pub id: String,

    #[serde(rename = "type")]
    pub element_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
}

/// Clipboard entry: element type and attributes, never an id
///
/// A paste always mints a fresh identifier on the next parse. `_text` is kept
/// so text elements carry their content; `style-*` entries are dropped since
/// the raw `style` attribute already holds them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CopiedElement {
    #[serde(rename = "type")]
    pub element_type: String,
    pub attributes: BTreeMap<String, String>,
}

impl CopiedElement {
    /// Build a clipboard entry from a parsed component
    pub fn from_component(component: &Component) -> Self {
        let attributes = component
            .attributes
            .iter()
            .filter(|(key, _)| key.as_str() != ID_ATTRIBUTE && !key.starts_with(STYLE_PREFIX))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Self {
            element_type: component.element_type.clone(),
            attributes,
        }
    }

    /// Text content to restore on paste, if any
    pub fn text(&self) -> Option<&str> {
        self.attributes.get(TEXT_KEY).map(String::as_str)
    }
}
