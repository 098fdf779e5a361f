//! UI components.

pub mod slide_area;
