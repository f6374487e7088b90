//! Style configuration supplied by the host for one drawing session.

use serde::{Deserialize, Serialize};

use crate::{SignatureError, SignatureResult};

fn default_width() -> f32 {
    300.0
}

fn default_height() -> f32 {
    200.0
}

fn default_stroke_color() -> String {
    "#000000".to_string()
}

fn default_stroke_width() -> f32 {
    3.0
}

fn default_background_color() -> String {
    "#ffffff".to_string()
}

/// Surface size and stroke appearance.
///
/// Fields missing from JSON fall back to their defaults, so `{}` is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Surface width in pixels.
    #[serde(default = "default_width")]
    pub width: f32,
    /// Surface height in pixels.
    #[serde(default = "default_height")]
    pub height: f32,
    /// Stroke color, any CSS/SVG color value.
    #[serde(default = "default_stroke_color")]
    pub stroke_color: String,
    /// Stroke width in pixels.
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,
    /// Background color, any CSS/SVG color value.
    #[serde(default = "default_background_color")]
    pub background_color: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            stroke_color: default_stroke_color(),
            stroke_width: default_stroke_width(),
            background_color: default_background_color(),
        }
    }
}

impl StyleConfig {
    /// Set the surface size.
    #[must_use]
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the stroke color.
    #[must_use]
    pub fn with_stroke_color(mut self, color: impl Into<String>) -> Self {
        self.stroke_color = color.into();
        self
    }

    /// Set the stroke width.
    #[must_use]
    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    /// Check that the configuration can be drawn with.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::InvalidStyle`] if a dimension or the stroke
    /// width is not a positive finite number, or a color is empty.
    pub fn validate(&self) -> SignatureResult<()> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("stroke_width", self.stroke_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SignatureError::InvalidStyle(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        for (name, value) in [
            ("stroke_color", &self.stroke_color),
            ("background_color", &self.background_color),
        ] {
            if value.trim().is_empty() {
                return Err(SignatureError::InvalidStyle(format!(
                    "{name} must not be empty"
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the result fails
    /// [`StyleConfig::validate`].
    pub fn from_json(json: &str) -> SignatureResult<Self> {
        let style: Self = serde_json::from_str(json)?;
        style.validate()?;
        Ok(style)
    }
}
