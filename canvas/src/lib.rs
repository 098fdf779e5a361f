//! Interaction controller for the circles canvas.
//!
//! This crate holds everything about the canvas that does not need a browser:
//! the shape list, the selection set, the drag session, and the geometry that
//! keeps shapes inside their container. The host (the root `circles` crate)
//! measures the container, forwards DOM events, and draws the
//! [`render::ShapeView`]s this crate produces.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | The controller, [`engine::EngineCore`], and its [`engine::Action`]s |
//! | [`doc`] | Shapes, positions, and the ordered shape store |
//! | [`input`] | Keys, selection state, and the drag state machine |
//! | [`geometry`] | Points, container bounds, clamping, percent conversion |
//! | [`render`] | Per-shape render descriptors |
//! | [`config`] | Tunables loaded from JSON |
//! | [`error`] | Host-boundary errors |
//! | [`consts`] | Shared constants (diameter ratios, delete keys) |

pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
pub mod render;
