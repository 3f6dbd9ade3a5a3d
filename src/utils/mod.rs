//! Utility modules for the SVG editor
//!
//! Numeric attribute helpers and SVG element name tables.

pub mod number;
pub mod svg_names;

// Re-export commonly used helpers
pub use number::{format_number, leading_number, parse_number};
pub use svg_names::canonical_tag_name;
