//! Models module for the SVG editor
//!
//! This module contains the data shapes shared between the document model,
//! the mutation engine and the UI: parsed components, their flat projection,
//! selections and the clipboard entry.

pub mod component;
pub mod selection;
pub mod ops;

// Re-export commonly used types
pub use component::*;
pub use selection::Selection;
pub use ops::{BatchOp, ReorderDirection};
