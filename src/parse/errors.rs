//! Error types for markup parsing
//!
//! `SyntaxError` is the only error surfaced to the user for display; it is
//! raised by the validation gate before any id is allocated.

use crate::document::DocumentError;
use thiserror::Error;

/// Markup is not well-formed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid SVG syntax: {message}")]
pub struct SyntaxError {
    /// Diagnostic from the XML parser, with position
    pub message: String,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Parsing failure; never accompanied by a partial tree
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Rejected by the validation gate
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// Passed the gate but the event reader could not build the document
    #[error("SVG parse error: {0}")]
    Reader(#[from] DocumentError),
}
