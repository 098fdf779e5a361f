//! Rendering boundary: turns controller state into drawable descriptors.
//!
//! The controller never touches the DOM. The host asks for one `ShapeView` per
//! shape, in draw order, and positions an element for each. It does not
//! mutate any application state.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::doc::{Shape, ShapeId};
use crate::engine::EngineCore;
use crate::geometry::ContainerRect;

/// Everything the host needs to draw one circle.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeView {
    pub id: ShapeId,
    /// Index in draw order; the host passes it back with pointer events.
    pub index: usize,
    /// Container-local top edge in pixels.
    pub top: f64,
    /// Container-local left edge in pixels.
    pub left: f64,
    pub diameter: f64,
    pub selected: bool,
    /// Stored `(top, left)` with its CSS unit, so percent positions keep
    /// following the container when it is resized.
    css_top: f64,
    css_left: f64,
    css_unit: &'static str,
}

impl ShapeView {
    fn new(index: usize, shape: &Shape, selected: bool, container: &ContainerRect) -> Self {
        let resolved = shape.position.resolve(container);
        let (css_top, css_left) = shape.position.raw();
        Self {
            id: shape.id,
            index,
            top: resolved.y,
            left: resolved.x,
            diameter: shape.diameter,
            selected,
            css_top,
            css_left,
            css_unit: shape.position.css_unit(),
        }
    }

    /// Inline CSS placing the circle absolutely inside the container.
    #[must_use]
    pub fn style(&self) -> String {
        let unit = self.css_unit;
        format!(
            "width: {d}px; height: {d}px; top: {t}{unit}; left: {l}{unit};",
            d = self.diameter,
            t = self.css_top,
            l = self.css_left,
        )
    }

    /// CSS class list: `circle`, plus `selected` when selected.
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.selected { "circle selected" } else { "circle" }
    }
}

/// Build one view per shape, in draw order.
#[must_use]
pub fn shape_views(core: &EngineCore, container: &ContainerRect) -> Vec<ShapeView> {
    core.shapes()
        .iter()
        .enumerate()
        .map(|(index, shape)| ShapeView::new(index, shape, core.ui.is_selected(&shape.id), container))
        .collect()
}
