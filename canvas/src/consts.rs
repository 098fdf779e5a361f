//! Shared numeric constants for the canvas crate.

// ── Shape sizing ────────────────────────────────────────────────

/// Smallest generated diameter, as a fraction of container width.
pub const MIN_DIAMETER_RATIO: f64 = 0.05;

/// Largest generated diameter, as a fraction of container width.
pub const MAX_DIAMETER_RATIO: f64 = 0.20;

// ── Keyboard ────────────────────────────────────────────────────

/// Keys that delete the current selection unless overridden by config.
pub const DEFAULT_DELETE_KEYS: [&str; 2] = ["Backspace", "Delete"];
