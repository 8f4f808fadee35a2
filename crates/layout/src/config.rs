// Chunk: docs/chunks/text_config - Text widget configuration

//! Text widget configuration.
//!
//! A [`TextConfig`] carries the settings a host widget starts from. It is
//! plain JSON; missing fields take their defaults:
//!
//! ```json
//! { "font_family": "Menlo", "font_size": 14.0, "padding": { "left": 4.0 }, "read_only": false }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::Padding;

pub const DEFAULT_FONT_FAMILY: &str = "Menlo";
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Font, padding and input settings for a text widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub font_family: String,
    pub font_size: f32,
    pub padding: Padding,
    pub read_only: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            padding: Padding::default(),
            read_only: false,
        }
    }
}

impl TextConfig {
    /// Parses and validates a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TextConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that the font size is a positive, finite number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(ConfigError::InvalidFontSize(self.font_size));
        }
        Ok(())
    }
}
