//! Validation gate
//!
//! Every parse goes through roxmltree first. Malformed markup never reaches
//! the allocator, so a half-read tree cannot poison id generation.

use super::errors::SyntaxError;
use roxmltree::{Document, ParsingOptions};

/// Check that markup is well-formed XML
pub fn validate(markup: &str) -> Result<(), SyntaxError> {
    // SVG files commonly carry a doctype
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;

    Document::parse_with_options(markup, options)
        .map(|_| ())
        .map_err(|e| SyntaxError::new(e.to_string()))
}
