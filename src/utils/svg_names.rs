//! SVG element names
//!
//! Component types are lower-cased, but SVG tag names are case-sensitive.
//! When an element is recreated from its type (paste, duplicate) the
//! camel-cased spelling has to come back.

const MIXED_CASE_ELEMENTS: &[&str] = &[
    "altGlyph",
    "altGlyphDef",
    "altGlyphItem",
    "animateColor",
    "animateMotion",
    "animateTransform",
    "clipPath",
    "feBlend",
    "feColorMatrix",
    "feComponentTransfer",
    "feComposite",
    "feConvolveMatrix",
    "feDiffuseLighting",
    "feDisplacementMap",
    "feDistantLight",
    "feDropShadow",
    "feFlood",
    "feFuncA",
    "feFuncB",
    "feFuncG",
    "feFuncR",
    "feGaussianBlur",
    "feImage",
    "feMerge",
    "feMergeNode",
    "feMorphology",
    "feOffset",
    "fePointLight",
    "feSpecularLighting",
    "feSpotLight",
    "feTile",
    "feTurbulence",
    "foreignObject",
    "glyphRef",
    "linearGradient",
    "radialGradient",
    "textPath",
];

/// Tag name to emit for a component type
pub fn canonical_tag_name(element_type: &str) -> String {
    MIXED_CASE_ELEMENTS
        .iter()
        .find(|name| name.eq_ignore_ascii_case(element_type))
        .map(|name| name.to_string())
        .unwrap_or_else(|| element_type.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restores_camel_case() {
        assert_eq!(canonical_tag_name("lineargradient"), "linearGradient");
        assert_eq!(canonical_tag_name("fegaussianblur"), "feGaussianBlur");
        assert_eq!(canonical_tag_name("rect"), "rect");
    }
}
