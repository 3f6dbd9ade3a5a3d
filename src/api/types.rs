//! Shared types for the WASM API
//!
//! This module contains result types returned by more than one export.

use crate::models::{Component, FlatComponent};
use serde::{Deserialize, Serialize};

/// Result of `parseSvg`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ParseOutput {
    /// Component tree (one root, or empty without an `<svg>` element)
    pub components: Vec<Component>,
    /// Pre-order flat list for the element list UI
    pub flat: Vec<FlatComponent>,
}

/// Result of `validateSvg`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
