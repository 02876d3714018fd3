//! Shared numeric constants for the minimap crate.

// ── Layout ──────────────────────────────────────────────────────

/// Inset applied on all four sides of the minimap's drawable area, in pixels.
pub const MINIMAP_PADDING: f64 = 5.0;

/// Scale factor used until the first layout pass with ready content.
pub const DEFAULT_SCALE_FACTOR: f64 = 0.75;

/// Zoom factor of content drawn at its natural size.
pub const UNZOOMED: f64 = 1.0;

// ── Environment ─────────────────────────────────────────────────

/// Environment variable overriding [`MINIMAP_PADDING`].
pub const ENV_PADDING: &str = "MINIMAP_PADDING";

/// Environment variable overriding [`DEFAULT_SCALE_FACTOR`].
pub const ENV_INITIAL_SCALE: &str = "MINIMAP_INITIAL_SCALE";
