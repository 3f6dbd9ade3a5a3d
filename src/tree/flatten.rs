//! Pre-order flattening

use crate::models::{Component, FlatComponent};

/// One entry per component, parents before their descendants
pub fn flatten(tree: &[Component]) -> Vec<FlatComponent> {
    project(tree, false)
}

/// Like `flatten`, carrying each component's attributes
pub fn flatten_with_attributes(tree: &[Component]) -> Vec<FlatComponent> {
    project(tree, true)
}

fn project(tree: &[Component], with_attributes: bool) -> Vec<FlatComponent> {
    tree.iter()
        .flat_map(Component::iter)
        .map(|component| FlatComponent {
            id: component.id.clone(),
            element_type: component.element_type.clone(),
            parent_id: component.parent_id.clone(),
            attributes: with_attributes.then(|| component.attributes.clone()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    #[test]
    fn test_flatten_is_pre_order() {
        let tree = parse("<svg><g><rect/><circle/></g><path/></svg>").unwrap();
        let flat = flatten(&tree);

        let ids: Vec<&str> = flat.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["svg-0", "g-0", "g-0-rect-0", "g-0-circle-0", "path-0"]);

        let parents: Vec<Option<&str>> = flat.iter().map(|f| f.parent_id.as_deref()).collect();
        assert_eq!(
            parents,
            vec![None, Some("svg-0"), Some("g-0"), Some("g-0"), Some("svg-0")]
        );
        assert!(flat.iter().all(|f| f.attributes.is_none()));
    }

    #[test]
    fn test_flatten_with_attributes_keeps_attribute_maps() {
        let tree = parse("<svg><rect fill=\"red\"/></svg>").unwrap();
        let flat = flatten_with_attributes(&tree);

        let rect = &flat[1];
        let attributes = rect.attributes.as_ref().unwrap();
        assert_eq!(attributes.get("fill").map(String::as_str), Some("red"));
    }

    #[test]
    fn test_flatten_empty_tree() {
        assert!(flatten(&[]).is_empty());
    }
}
