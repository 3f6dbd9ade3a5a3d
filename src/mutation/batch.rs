//! Multi-selection aggregation and fan-out edits

use super::property::update_property;
use crate::models::{BatchOp, Component};
use crate::parse::parse;
use crate::tree::find_by_id;
use crate::utils::{format_number, leading_number};
use std::collections::BTreeMap;

/// Properties shared by every selected component
///
/// Only keys present on all resolved components are reported. The value is
/// `Some` when every component agrees and `None` when they differ. Ids that
/// do not resolve are ignored; `None` overall when nothing resolves.
pub fn common_properties(
    selection: &[String],
    tree: &[Component],
) -> Option<BTreeMap<String, Option<String>>> {
    let mut resolved = selection.iter().filter_map(|id| find_by_id(tree, id));
    let first = resolved.next()?;

    let mut common: BTreeMap<String, Option<String>> = first
        .attributes
        .iter()
        .map(|(key, value)| (key.clone(), Some(value.clone())))
        .collect();

    for component in resolved {
        common.retain(|key, value| match component.attribute(key) {
            Some(other) => {
                if value.as_deref() != Some(other) {
                    *value = None;
                }
                true
            }
            None => false,
        });
    }

    Some(common)
}

/// Add or subtract `amount` from a numeric property on every selected element
///
/// The current value is the number the property starts with (`"12px"` reads
/// as 12), or 0 when absent. Decreases stop at zero. Each element is edited
/// in turn; one that fails to resolve does not undo the others. A non-finite
/// amount, or a result that overflows, leaves the markup unchanged.
pub fn batch_update(markup: &str, selection: &[String], property: &str, op: BatchOp, amount: f64) -> String {
    if !amount.is_finite() {
        log::warn!("batch_update: ignoring non-finite amount {}", amount);
        return markup.to_string();
    }

    selection.iter().fold(markup.to_string(), |current, id| {
        let tree = match parse(&current) {
            Ok(tree) => tree,
            Err(err) => {
                log::warn!("batch_update: {}", err);
                return current;
            }
        };
        let Some(component) = find_by_id(&tree, id) else {
            log::debug!("batch_update: '{}' does not resolve, skipped", id);
            return current;
        };

        let value = component
            .attribute(property)
            .and_then(leading_number)
            .unwrap_or(0.0);
        let updated = op.apply(value, amount);
        if !updated.is_finite() {
            log::warn!("batch_update: {} on '{}' overflows, skipped", property, id);
            return current;
        }
        update_property(&current, id, property, &format_number(updated))
    })
}
