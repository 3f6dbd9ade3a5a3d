//! Owned markup document
//!
//! An arena-backed representation of SVG markup. Nodes live in a single
//! `Vec` and refer to each other by `NodeId`, so a document is a plain value:
//! the mutation engine owns one for the duration of a call and drops it.
//!
//! Everything in the source survives a read/write cycle (text, comments,
//! processing instructions, doctype), but only elements become components.
//!
//! # Module Structure
//!
//! - `reader`: builds a document from markup with quick-xml's event reader
//! - `writer`: serializes a document with quick-xml's writer
//! - `style`: inline `style` attribute declarations

pub mod reader;
pub mod style;
pub mod writer;

use crate::models::{ReorderDirection, ID_ATTRIBUTE};
use thiserror::Error;

/// Markup read/write failures
#[derive(Debug, Clone, Error)]
pub enum DocumentError {
    /// The event reader rejected the markup
    #[error("markup read error at byte {position}: {message}")]
    Read { position: usize, message: String },

    /// The writer failed to emit markup
    #[error("markup write error: {0}")]
    Write(String),
}

/// Index of a node inside its document's arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// An element: verbatim tag name and ordered attributes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Lower-cased tag name, the component type
    pub fn element_type(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Non-empty `id` attribute, if any
    pub fn id(&self) -> Option<&str> {
        self.attribute(ID_ATTRIBUTE).filter(|id| !id.is_empty())
    }

    /// Set an attribute in place, or append it when new
    pub fn set_attribute(&mut self, key: &str, value: &str) {
        match self.attributes.iter_mut().find(|(name, _)| name == key) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.attributes.push((key.to_string(), value.to_string())),
        }
    }

    pub fn remove_attribute(&mut self, key: &str) -> Option<String> {
        let index = self.attributes.iter().position(|(name, _)| name == key)?;
        Some(self.attributes.remove(index).1)
    }
}

/// Node payload
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Element(Element),
    /// Unescaped character data (CDATA is folded in here)
    Text(String),
    Comment(String),
    /// Raw content between `<?` and `?>`, including the XML declaration
    ProcessingInstruction(String),
    DocType(String),
}

#[derive(Clone, Debug)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed markup document
#[derive(Clone, Debug, Default)]
pub struct SvgDocument {
    nodes: Vec<Node>,
    top_level: Vec<NodeId>,
}

impl SvgDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read markup into a document (no well-formedness gate, see `parse::validate`)
    pub fn parse(markup: &str) -> Result<Self, DocumentError> {
        reader::read_document(markup)
    }

    /// Serialize the document back to markup
    pub fn to_markup(&self) -> Result<String, DocumentError> {
        writer::write_document(self)
    }

    /// Create a node and attach it as the last child of `parent` (or top level)
    pub fn append(&mut self, parent: Option<NodeId>, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent,
            children: Vec::new(),
        });
        match parent {
            Some(parent) => self.nodes[parent.0].children.push(id),
            None => self.top_level.push(id),
        }
        id
    }

    pub fn append_element(&mut self, parent: NodeId, element: Element) -> NodeId {
        self.append(Some(parent), NodeKind::Element(element))
    }

    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.append(Some(parent), NodeKind::Text(text.to_string()))
    }

    pub fn kind(&self, node: NodeId) -> &NodeKind {
        &self.nodes[node.0].kind
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        match &self.nodes[node.0].kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        match &mut self.nodes[node.0].kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Nodes outside the root element (prolog, root, trailing misc)
    pub fn top_level(&self) -> &[NodeId] {
        &self.top_level
    }

    /// Direct element children in document order
    pub fn child_elements(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(node)
            .iter()
            .copied()
            .filter(move |child| self.element(*child).is_some())
    }

    pub fn has_child_elements(&self, node: NodeId) -> bool {
        self.child_elements(node).next().is_some()
    }

    /// All attached elements in document order
    pub fn elements(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        for &node in &self.top_level {
            self.collect_elements(node, &mut out);
        }
        out
    }

    /// `node` and its element descendants in document order
    pub fn subtree_elements(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_elements(node, &mut out);
        out
    }

    fn collect_elements(&self, node: NodeId, out: &mut Vec<NodeId>) {
        if self.element(node).is_none() {
            return;
        }
        out.push(node);
        for &child in self.children(node) {
            self.collect_elements(child, out);
        }
    }

    /// First `<svg>` element in document order, case-insensitive
    pub fn root_svg(&self) -> Option<NodeId> {
        self.elements().into_iter().find(|&node| {
            self.element(node)
                .map(|element| element.name.eq_ignore_ascii_case("svg"))
                .unwrap_or(false)
        })
    }

    /// Every non-empty `id` attribute in the document
    pub fn existing_ids(&self) -> Vec<String> {
        self.elements()
            .into_iter()
            .filter_map(|node| self.element(node).and_then(Element::id).map(str::to_string))
            .collect()
    }

    /// First element under the svg root carrying exactly this id
    pub fn find_element_by_id(&self, id: &str) -> Option<NodeId> {
        let root = self.root_svg()?;
        self.subtree_elements(root)
            .into_iter()
            .find(|&node| self.element(node).and_then(Element::id) == Some(id))
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, node: NodeId) -> String {
        let mut text = String::new();
        self.collect_text(node, &mut text);
        text
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        match &self.nodes[node.0].kind {
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Element(_) => {
                for &child in self.children(node) {
                    self.collect_text(child, out);
                }
            }
            _ => {}
        }
    }

    /// Replace all content of `node` with a single text node
    pub fn set_text_content(&mut self, node: NodeId, text: &str) {
        let children = std::mem::take(&mut self.nodes[node.0].children);
        for child in children {
            self.nodes[child.0].parent = None;
        }
        if !text.is_empty() {
            self.append_text(node, text);
        }
    }

    /// Detach a node from its parent; the arena slot is left orphaned
    pub fn detach(&mut self, node: NodeId) -> bool {
        let siblings = match self.nodes[node.0].parent {
            Some(parent) => &mut self.nodes[parent.0].children,
            None => &mut self.top_level,
        };
        let Some(index) = siblings.iter().position(|&sibling| sibling == node) else {
            return false;
        };
        siblings.remove(index);
        self.nodes[node.0].parent = None;
        true
    }

    /// Swap an element with its neighbouring sibling element
    ///
    /// Non-element siblings (whitespace, comments) keep their slots. Returns
    /// false when there is no sibling in that direction.
    pub fn swap_with_sibling(&mut self, node: NodeId, direction: ReorderDirection) -> bool {
        let Some(parent) = self.nodes[node.0].parent else {
            return false;
        };
        let element_slots: Vec<usize> = self.nodes[parent.0]
            .children
            .iter()
            .enumerate()
            .filter(|(_, child)| self.element(**child).is_some())
            .map(|(slot, _)| slot)
            .collect();
        let Some(position) = element_slots
            .iter()
            .position(|&slot| self.nodes[parent.0].children[slot] == node)
        else {
            return false;
        };

        let neighbour = match direction {
            ReorderDirection::Raise => element_slots.get(position + 1),
            ReorderDirection::Lower => position.checked_sub(1).and_then(|p| element_slots.get(p)),
        };
        let Some(&neighbour) = neighbour else {
            return false;
        };

        self.nodes[parent.0]
            .children
            .swap(element_slots[position], neighbour);
        true
    }
}
