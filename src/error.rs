//! Error type for the configuration boundary.
//!
//! Geometry and input handling never fail: when the window or content is not
//! ready they simply do nothing. Only building a [`crate::MinimapConfig`], or
//! a [`crate::Minimap`] from one, can be rejected.

/// Error returned when a minimap configuration is invalid.
#[derive(Debug, thiserror::Error)]
pub enum MinimapError {
    /// Padding must be finite and not negative.
    #[error("invalid padding: {0} (expected a finite value >= 0)")]
    InvalidPadding(f64),
    /// The initial scale factor must be finite and strictly positive.
    #[error("invalid scale factor: {0} (expected a finite value > 0)")]
    InvalidScaleFactor(f64),
    /// The configuration document could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
