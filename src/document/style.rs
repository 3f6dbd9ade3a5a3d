//! Inline `style` attribute declarations
//!
//! Declarations keep their source order. Setting an existing property updates
//! it in place; setting a new one appends it.

use std::fmt;

/// Ordered `name: value` declarations of one `style` attribute
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleDeclarations {
    entries: Vec<(String, String)>,
}

impl StyleDeclarations {
    /// Parse `"fill:red; opacity: 0.5"`; malformed pieces are skipped
    pub fn parse(style: &str) -> Self {
        let mut declarations = Self::default();
        for piece in style.split(';') {
            let Some((name, value)) = piece.split_once(':') else {
                continue;
            };
            let (name, value) = (name.trim(), value.trim());
            if !name.is_empty() && !value.is_empty() {
                declarations.set(name, value);
            }
        }
        declarations
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Upsert a declaration; an empty value removes it
    pub fn set(&mut self, name: &str, value: &str) {
        let (name, value) = (name.trim(), value.trim());
        if name.is_empty() {
            return;
        }
        if value.is_empty() {
            self.remove(name);
            return;
        }
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(index).1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl fmt::Display for StyleDeclarations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (name, value)) in self.entries.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        Ok(())
    }
}
