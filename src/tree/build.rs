//! Display tree rebuilt from a flat list
//!
//! The tree view receives the flat projection and nests it again by
//! `parentId`. Entries whose parent is not in the list become roots.

use crate::models::FlatComponent;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Node of the tree view
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub id: String,

    #[serde(rename = "type")]
    pub element_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    pub children: Vec<TreeNode>,
}

/// Nest a flat list by parent id, keeping list order among siblings
pub fn build_tree(flat: &[FlatComponent]) -> Vec<TreeNode> {
    let mut index_of: HashMap<&str, usize> = HashMap::new();
    for (index, entry) in flat.iter().enumerate() {
        index_of.entry(entry.id.as_str()).or_insert(index);
    }

    let mut children_of: Vec<Vec<usize>> = vec![Vec::new(); flat.len()];
    let mut roots = Vec::new();
    for (index, entry) in flat.iter().enumerate() {
        let parent = entry
            .parent_id
            .as_deref()
            .and_then(|parent| index_of.get(parent).copied())
            .filter(|&parent| parent != index);
        match parent {
            Some(parent) => children_of[parent].push(index),
            None => roots.push(index),
        }
    }

    roots
        .into_iter()
        .map(|root| build_node(flat, &children_of, root))
        .collect()
}

fn build_node(flat: &[FlatComponent], children_of: &[Vec<usize>], index: usize) -> TreeNode {
    let entry = &flat[index];
    TreeNode {
        id: entry.id.clone(),
        element_type: entry.element_type.clone(),
        parent_id: entry.parent_id.clone(),
        children: children_of[index]
            .iter()
            .map(|&child| build_node(flat, children_of, child))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;
    use crate::tree::flatten;

    fn entry(id: &str, parent: Option<&str>) -> FlatComponent {
        FlatComponent {
            id: id.to_string(),
            element_type: "g".to_string(),
            parent_id: parent.map(str::to_string),
            attributes: None,
        }
    }

    #[test]
    fn test_rebuilds_parsed_structure() {
        let tree = parse("<svg><g><rect/><circle/></g><path/></svg>").unwrap();
        let rebuilt = build_tree(&flatten(&tree));

        assert_eq!(rebuilt.len(), 1);
        let svg = &rebuilt[0];
        assert_eq!(svg.children.len(), 2);
        assert_eq!(svg.children[0].children.len(), 2);
        assert_eq!(svg.children[1].element_type, "path");
    }

    #[test]
    fn test_orphans_become_roots() {
        let flat = vec![entry("a", None), entry("b", Some("missing")), entry("c", Some("a"))];
        let roots = build_tree(&flat);

        let ids: Vec<&str> = roots.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(roots[0].children[0].id, "c");
    }

    #[test]
    fn test_self_parent_is_treated_as_root() {
        let roots = build_tree(&[entry("a", Some("a"))]);
        assert_eq!(roots.len(), 1);
    }
}
