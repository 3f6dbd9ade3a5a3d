//! Mutation engine
//!
//! Every edit follows the same cycle: parse the markup (validation gate
//! included), resolve the target id against the fresh tree, edit the owned
//! document, serialize, and re-parse the output. The engine never emits
//! markup that fails to re-parse.
//!
//! Each operation comes in two forms:
//! - `try_*` returns `Result<String, MutationError>` for callers that want
//!   the reason an edit did nothing
//! - the plain form absorbs every error and hands back the input markup
//!   unchanged, so the UI can treat each call as succeed-or-no-op
//!
//! # Module Structure
//!
//! - `property`: attribute, inline-style and text edits
//! - `structure`: duplicate, reorder, remove, paste
//! - `highlight`: preview-only outline injection
//! - `batch`: multi-selection aggregation and fan-out edits

pub mod batch;
pub mod highlight;
pub mod property;
pub mod structure;

pub use batch::{batch_update, common_properties};
pub use highlight::{highlight, try_highlight};
pub use property::{try_update_property, update_property};
pub use structure::{
    copy_element, duplicate, duplicate_with, paste, remove, reorder, reorder_many, try_duplicate,
    try_paste, try_remove, try_reorder,
};

use crate::document::{DocumentError, NodeId, SvgDocument};
use crate::parse::{parse, parse_document, ParseError, ParsedSvg};
use crate::tree::find_by_id;
use thiserror::Error;

/// Reasons an edit leaves the markup unchanged
#[derive(Debug, Clone, Error)]
pub enum MutationError {
    /// The input markup itself does not parse
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// No element matches the id, even after hierarchical fallback
    #[error("no element resolves from id '{0}'")]
    UnresolvedId(String),

    /// Structural edits need a parent; the svg root has none
    #[error("element '{0}' is the document root")]
    RootHasNoParent(String),

    /// The edited document serialized to markup that does not re-parse
    #[error("edit would produce invalid markup: {0}")]
    PostMutationInvalid(String),

    #[error(transparent)]
    Serialize(#[from] DocumentError),
}

impl MutationError {
    /// Expected transient condition rather than a fault
    pub fn is_soft_miss(&self) -> bool {
        matches!(self, MutationError::UnresolvedId(_))
    }
}

/// Parsed document plus the arena node an id resolved to
pub(crate) struct Target {
    pub parsed: ParsedSvg,
    pub node: NodeId,
}

/// Parse `markup` and resolve `id` (exact, then hierarchical fallback)
pub(crate) fn resolve(markup: &str, id: &str) -> Result<Target, MutationError> {
    let parsed = parse_document(markup)?;
    let node = locate(&parsed, id).ok_or_else(|| MutationError::UnresolvedId(id.to_string()))?;
    Ok(Target { parsed, node })
}

/// Arena node for an id within an already parsed document
pub(crate) fn locate(parsed: &ParsedSvg, id: &str) -> Option<NodeId> {
    let component = find_by_id(&parsed.components, id)?;
    parsed.document.find_element_by_id(&component.id)
}

/// Serialize an edited document and prove the output re-parses
pub(crate) fn finish(document: &SvgDocument) -> Result<String, MutationError> {
    let markup = document.to_markup()?;
    parse(&markup).map_err(|e| MutationError::PostMutationInvalid(e.to_string()))?;
    Ok(markup)
}

/// Collapse a mutation result to markup, falling back to the input
pub(crate) fn absorb(operation: &str, original: &str, result: Result<String, MutationError>) -> String {
    match result {
        Ok(markup) => markup,
        Err(err) if err.is_soft_miss() => {
            log::debug!("{}: {}, markup unchanged", operation, err);
            original.to_string()
        }
        Err(err) => {
            log::warn!("{}: {}, markup unchanged", operation, err);
            original.to_string()
        }
    }
}
