//! SVG Visual Editor WASM Module
//!
//! This is the main WASM module for the SVG visual editor. It keeps a
//! component tree in sync with SVG markup: parsing assigns stable ids,
//! mutations rewrite the markup, and the tree is always re-derived from the
//! markup that was committed.

pub mod api;
pub mod config;
pub mod document;
pub mod models;
pub mod mutation;
pub mod parse;
pub mod session;
pub mod store;
pub mod tree;
pub mod undo;
pub mod utils;

// Re-export commonly used types
pub use config::{EditorConfig, HighlightStyle};
pub use models::*;
pub use mutation::{
    batch_update, common_properties, duplicate, highlight, paste, remove, reorder, reorder_many,
    update_property, MutationError,
};
pub use parse::{parse, parse_document, serialize, validate, ParseError, SyntaxError};
pub use session::{EditOutcome, EditorSession, SessionSnapshot};
pub use store::{DocumentStore, MemoryStore, StoreError};
pub use tree::{build_tree, find_by_id, flatten, flatten_with_attributes};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        wasm_warn!("logger already initialized: {}", e);
    }

    log::info!("SVG editor WASM module initialized");
}
