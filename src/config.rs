//! Minimap configuration from defaults, JSON or environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SCALE_FACTOR, ENV_INITIAL_SCALE, ENV_PADDING, MINIMAP_PADDING};
use crate::error::MinimapError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimapConfig {
    /// Inset on all four sides of the drawable area, in pixels.
    pub padding: f64,
    /// Scale factor reported before the first layout pass with ready content.
    pub initial_scale_factor: f64,
}

impl Default for MinimapConfig {
    fn default() -> Self {
        Self { padding: MINIMAP_PADDING, initial_scale_factor: DEFAULT_SCALE_FACTOR }
    }
}

impl MinimapConfig {
    /// Parse and validate a JSON document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`MinimapError::ConfigParse`] for malformed JSON and the
    /// validation errors of [`MinimapConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, MinimapError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()
    }

    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `MINIMAP_PADDING`: default 5
    /// - `MINIMAP_INITIAL_SCALE`: default 0.75
    ///
    /// Unparseable values fall back to the default.
    ///
    /// # Errors
    ///
    /// Returns the validation errors of [`MinimapConfig::validate`].
    pub fn from_env() -> Result<Self, MinimapError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup (used by [`Self::from_env`]).
    ///
    /// # Errors
    ///
    /// Returns the validation errors of [`MinimapConfig::validate`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, MinimapError> {
        let config = Self {
            padding: parse_f64(&lookup, ENV_PADDING, MINIMAP_PADDING),
            initial_scale_factor: parse_f64(&lookup, ENV_INITIAL_SCALE, DEFAULT_SCALE_FACTOR),
        };
        config.validate()
    }

    /// Check value ranges, returning the config unchanged when valid.
    ///
    /// # Errors
    ///
    /// [`MinimapError::InvalidPadding`] for negative or non-finite padding,
    /// [`MinimapError::InvalidScaleFactor`] for a non-positive or non-finite
    /// initial scale factor.
    pub fn validate(self) -> Result<Self, MinimapError> {
        if !self.padding.is_finite() || self.padding < 0.0 {
            tracing::warn!(padding = self.padding, "rejecting minimap padding");
            return Err(MinimapError::InvalidPadding(self.padding));
        }
        if !self.initial_scale_factor.is_finite() || self.initial_scale_factor <= 0.0 {
            tracing::warn!(scale = self.initial_scale_factor, "rejecting minimap scale factor");
            return Err(MinimapError::InvalidScaleFactor(self.initial_scale_factor));
        }
        Ok(self)
    }
}

fn parse_f64(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: f64) -> f64 {
    lookup(key)
        .and_then(|v| v.trim().parse::<f64>().ok())
        .unwrap_or(default)
}
