//! Locating the controller config in the page.
//!
//! The page may inline a JSON document in
//! `<script id="circles-config" type="application/json">`. A missing element
//! means "use defaults"; a present but broken one is an error the caller logs.

use canvas::config::CanvasConfig;
use canvas::error::CanvasError;

#[cfg(test)]
#[path = "config_source_test.rs"]
mod config_source_test;

/// Id of the inline config element.
pub const CONFIG_ELEMENT_ID: &str = "circles-config";

/// Parse raw config text. Absent or blank text yields the defaults.
///
/// # Errors
///
/// Propagates parse and validation failures from `CanvasConfig::from_json`.
pub fn parse(raw: Option<&str>) -> Result<CanvasConfig, CanvasError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(CanvasConfig::default()),
        Some(text) => CanvasConfig::from_json(text),
    }
}

/// Read and parse the inline config element from the current document.
///
/// # Errors
///
/// Returns `CanvasError::NoWindow` outside a browser page, or a parse error
/// for a malformed config element.
pub fn load() -> Result<CanvasConfig, CanvasError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(CanvasError::NoWindow)?;
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    parse(raw.as_deref())
}
