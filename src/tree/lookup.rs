//! Lookup by id
//!
//! Exact match first. When that fails and the id looks generated, it is
//! decoded as `<group>-<type>-<index>` and re-resolved against the current
//! tree: the `index`-th direct child of `group` with that type. This keeps
//! stale ids held by the UI usable for the window between an edit and the
//! next render.

use crate::models::Component;

/// One way of reading a generated id
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HierarchicalId<'a> {
    /// Naming parent; `None` means the document root
    pub group: Option<&'a str>,
    pub element_type: &'a str,
    pub index: usize,
}

/// Find a component by id, falling back to hierarchical decoding
pub fn find_by_id<'a>(tree: &'a [Component], id: &str) -> Option<&'a Component> {
    if let Some(component) = find_exact(tree, id) {
        return Some(component);
    }
    if !id.contains('-') {
        return None;
    }

    let resolved = resolve_hierarchical(tree, id);
    if let Some(component) = resolved {
        log::debug!("resolved stale id {} to {}", id, component.id);
    }
    resolved
}

fn find_exact<'a>(tree: &'a [Component], id: &str) -> Option<&'a Component> {
    tree.iter()
        .flat_map(Component::iter)
        .find(|component| component.id == id)
}

/// Candidate decodings, most specific group first
///
/// Types may contain hyphens (`font-face`), so every split point of the
/// prefix is a candidate; the last candidate reads the whole prefix as a type
/// under the root.
pub fn decode_hierarchical_id(id: &str) -> Vec<HierarchicalId<'_>> {
    let Some((prefix, index)) = id.rsplit_once('-') else {
        return Vec::new();
    };
    let Ok(index) = index.parse::<usize>() else {
        return Vec::new();
    };

    let mut candidates: Vec<HierarchicalId<'_>> = prefix
        .rmatch_indices('-')
        .map(|(position, _)| (&prefix[..position], &prefix[position + 1..]))
        .filter(|(group, element_type)| !group.is_empty() && !element_type.is_empty())
        .map(|(group, element_type)| HierarchicalId {
            group: Some(group),
            element_type,
            index,
        })
        .collect();

    if !prefix.is_empty() {
        candidates.push(HierarchicalId {
            group: None,
            element_type: prefix,
            index,
        });
    }
    candidates
}

fn resolve_hierarchical<'a>(tree: &'a [Component], id: &str) -> Option<&'a Component> {
    let candidates = decode_hierarchical_id(id);

    // The first candidate whose group exists decides the outcome
    for candidate in candidates.iter().filter(|c| c.group.is_some()) {
        if let Some(group) = candidate.group.and_then(|g| find_exact(tree, g)) {
            return nth_child_of_type(group, candidate.element_type, candidate.index);
        }
    }

    let root_candidate = candidates.iter().find(|c| c.group.is_none())?;
    tree.iter()
        .find_map(|root| nth_in_root_scope(root, root_candidate.element_type, root_candidate.index))
}

/// Unprefixed ids count the root in its own type's sequence, so `svg-0` is
/// the root and `svg-1` the first `<svg>` directly under it
fn nth_in_root_scope<'a>(root: &'a Component, element_type: &str, index: usize) -> Option<&'a Component> {
    if !root.element_type.eq_ignore_ascii_case(element_type) {
        return nth_child_of_type(root, element_type, index);
    }
    match index {
        0 => Some(root),
        n => nth_child_of_type(root, element_type, n - 1),
    }
}

fn nth_child_of_type<'a>(group: &'a Component, element_type: &str, index: usize) -> Option<&'a Component> {
    group
        .children
        .iter()
        .filter(|child| child.element_type.eq_ignore_ascii_case(element_type))
        .nth(index)
}
