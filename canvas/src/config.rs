//! Controller configuration.
//!
//! The host reads a JSON document (usually inlined in the page) and hands the
//! parsed `CanvasConfig` to `EngineCore::with_config`. Every field has a
//! default, so an empty object `{}` is a valid config.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_DELETE_KEYS, MAX_DIAMETER_RATIO, MIN_DIAMETER_RATIO};
use crate::error::CanvasError;

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

/// How a group of selected shapes follows the pointer while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupDrag {
    /// Every selected shape is placed using the grabbed shape's pointer
    /// offset, so the group collapses onto the grab point.
    #[default]
    Align,
    /// Each selected shape keeps its own pointer offset from drag start, so
    /// relative spacing is preserved.
    Preserve,
}

/// Tunables for shape generation and input handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Smallest diameter as a fraction of container width.
    pub min_diameter_ratio: f64,
    /// Largest diameter as a fraction of container width.
    pub max_diameter_ratio: f64,
    /// `KeyboardEvent.key` values that delete the selection.
    pub delete_keys: Vec<String>,
    pub group_drag: GroupDrag,
    /// Console log level installed by the browser host.
    pub log_level: log::Level,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            min_diameter_ratio: MIN_DIAMETER_RATIO,
            max_diameter_ratio: MAX_DIAMETER_RATIO,
            delete_keys: DEFAULT_DELETE_KEYS.iter().map(|k| (*k).to_string()).collect(),
            group_drag: GroupDrag::default(),
            log_level: log::Level::Info,
        }
    }
}

impl CanvasConfig {
    /// Parse and validate a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::ConfigParse` for malformed JSON and
    /// `CanvasError::InvalidConfig` when validation fails.
    pub fn from_json(raw: &str) -> Result<Self, CanvasError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the diameter ratios form a usable range.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::InvalidConfig` when a ratio is outside `(0, 1]`
    /// or the minimum exceeds the maximum.
    pub fn validate(&self) -> Result<(), CanvasError> {
        for (name, ratio) in [("min_diameter_ratio", self.min_diameter_ratio), ("max_diameter_ratio", self.max_diameter_ratio)] {
            if !(ratio > 0.0 && ratio <= 1.0) {
                return Err(CanvasError::InvalidConfig(format!("{name} must be in (0, 1], got {ratio}")));
            }
        }
        if self.min_diameter_ratio > self.max_diameter_ratio {
            return Err(CanvasError::InvalidConfig(format!(
                "min_diameter_ratio {} exceeds max_diameter_ratio {}",
                self.min_diameter_ratio, self.max_diameter_ratio
            )));
        }
        Ok(())
    }

    /// Whether `key` is one of the configured delete keys.
    #[must_use]
    pub fn is_delete_key(&self, key: &str) -> bool {
        self.delete_keys.iter().any(|k| k == key)
    }
}
