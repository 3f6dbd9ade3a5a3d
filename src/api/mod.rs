//! SVG Editor WASM API
//!
//! This module provides the JavaScript-facing API for the SVG editor.
//! It includes shared utilities for serialization, error handling and
//! logging, and the exported functions organized by functional domain.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling, and logging
//! - `types`: Result types shared by several exports
//! - `core`: Stateless markup operations (parse, flatten, mutate, highlight)
//! - `session`: The WASM-owned editor session
//! - `documents`: Saved documents

pub mod helpers;
pub mod types;
pub mod core;
pub mod session;
pub mod documents;

// Re-export all public functions from modules to maintain a flat public API
pub use self::core::*;
pub use self::session::*;
pub use self::documents::*;
