//! Numeric attribute values
//!
//! Attribute values are strings; numeric edits read a number out of them and
//! write back the shortest decimal form (`30`, not `30.0`).

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[-+]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][-+]?\d+)?").expect("valid number pattern")
});

/// Parse a whole value as a number (`"10"`, `" 2.5 "`)
pub fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Read the number a value starts with, ignoring any unit (`"12px"` → 12)
pub fn leading_number(value: &str) -> Option<f64> {
    let matched = LEADING_NUMBER.find(value)?;
    parse_number(matched.as_str())
}

/// Shortest decimal representation for writing back into markup
pub fn format_number(value: f64) -> String {
    // avoid "-0"
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_number_ignores_units() {
        assert_eq!(leading_number("12px"), Some(12.0));
        assert_eq!(leading_number(" -3.5em"), Some(-3.5));
        assert_eq!(leading_number(".5"), Some(0.5));
        assert_eq!(leading_number("1e2"), Some(100.0));
        assert_eq!(leading_number("red"), None);
        assert_eq!(leading_number(""), None);
    }

    #[test]
    fn test_parse_number_requires_whole_value() {
        assert_eq!(parse_number("10"), Some(10.0));
        assert_eq!(parse_number("10px"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn test_format_number_is_shortest() {
        assert_eq!(format_number(30.0), "30");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.0), "0");
    }
}
