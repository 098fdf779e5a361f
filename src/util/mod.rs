//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (DOM measurement, event mapping,
//! config lookup) from component logic so the pure parts stay testable off
//! the browser.

pub mod actions;
pub mod config_source;
pub mod dom_input;
