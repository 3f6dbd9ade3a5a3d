//! Operation selectors passed from the UI

use wasm_bindgen::prelude::*;

/// Direction of a one-step z-order change
#[wasm_bindgen]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum ReorderDirection {
    /// Swap with the next sibling (paints later, on top)
    Raise = 0,

    /// Swap with the previous sibling
    Lower = 1,
}

/// Arithmetic applied by a batch numeric edit
#[wasm_bindgen]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum BatchOp {
    Increase = 0,

    /// Subtract, never going below zero
    Decrease = 1,
}

impl BatchOp {
    /// Apply the operation to a current value
    pub fn apply(self, current: f64, amount: f64) -> f64 {
        match self {
            BatchOp::Increase => current + amount,
            BatchOp::Decrease => (current - amount).max(0.0),
        }
    }
}
