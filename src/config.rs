//! Editor configuration
//!
//! Every field has a default, so a partial JSON or YAML document (or an
//! empty object from JS) is a valid configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Document shown when the editor opens
pub const DEFAULT_SVG: &str = r#"<svg width="200" height="200" xmlns="http://www.w3.org/2000/svg">
  <rect id="rect1" x="10" y="10" width="80" height="80" fill="blue" />
  <circle id="circle1" cx="150" cy="50" r="40" fill="red" />
  <path id="path1" d="M10 150 L90 150 L50 90 Z" fill="green" />
</svg>"#;

/// Content of a newly created document
pub const NEW_DOCUMENT_SVG: &str =
    r#"<svg width="400" height="400" xmlns="http://www.w3.org/2000/svg"></svg>"#;

/// Configuration loading failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Outline styles injected into the preview
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct HighlightStyle {
    pub selected_outline: String,
    pub hovered_outline: String,
    pub outline_offset: String,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            selected_outline: "2px solid hsl(var(--primary))".to_string(),
            hovered_outline: "2px solid hsl(var(--accent))".to_string(),
            outline_offset: "2px".to_string(),
        }
    }
}

/// Editor settings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Added to each positional attribute of a duplicate
    pub duplicate_offset: f64,

    /// Attributes shifted by `duplicate_offset`
    pub offset_attributes: Vec<String>,

    pub highlight: HighlightStyle,

    /// Initial state of the preview grid
    pub show_grid: bool,

    /// Maximum number of undo steps kept
    pub history_limit: usize,

    pub initial_markup: String,
    pub new_document_markup: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            duplicate_offset: 20.0,
            offset_attributes: ["x", "y", "cx", "cy"].iter().map(|s| s.to_string()).collect(),
            highlight: HighlightStyle::default(),
            show_grid: true,
            history_limit: 100,
            initial_markup: DEFAULT_SVG.to_string(),
            new_document_markup: NEW_DOCUMENT_SVG.to_string(),
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validated()
    }

    /// Reject values the editor cannot work with
    pub fn validated(self) -> Result<Self, ConfigError> {
        if !self.duplicate_offset.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "duplicateOffset must be finite, got {}",
                self.duplicate_offset
            )));
        }
        if self.history_limit == 0 {
            return Err(ConfigError::Invalid("historyLimit must be at least 1".to_string()));
        }
        Ok(self)
    }
}
