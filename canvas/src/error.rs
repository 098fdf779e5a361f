//! Errors surfaced at the host boundary.
//!
//! Controller operations are total; these cover the places where the browser
//! host can fail to supply what the controller needs.

/// Errors produced while wiring the controller into a page.
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    /// The container element is not mounted, so it cannot be measured.
    #[error("container element is not mounted")]
    ContainerNotMounted,

    /// No browser window is available (e.g. running outside a page).
    #[error("browser window unavailable")]
    NoWindow,

    /// The config document is not valid JSON for `CanvasConfig`.
    #[error("config parse failed: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The config parsed but carries values the controller cannot honor.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
