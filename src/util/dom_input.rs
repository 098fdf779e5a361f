//! DOM measurement and event mapping helpers.

use canvas::error::CanvasError;
use canvas::geometry::{ContainerRect, Point};
use leptos::html::Div;
use leptos::prelude::*;

#[cfg(test)]
#[path = "dom_input_test.rs"]
mod dom_input_test;

/// Client-space pointer position from a mouse event's integer coordinates.
pub fn client_point(client_x: i32, client_y: i32) -> Point {
    Point::new(f64::from(client_x), f64::from(client_y))
}

/// Padding-box bounds of `el` in client coordinates.
///
/// Absolutely positioned circles are laid out against the padding box, so
/// the border (`client_left` / `client_top`) is skipped.
pub fn measure(el: &web_sys::Element) -> ContainerRect {
    let rect = el.get_bounding_client_rect();
    ContainerRect::new(
        rect.left() + f64::from(el.client_left()),
        rect.top() + f64::from(el.client_top()),
        f64::from(el.client_width()),
        f64::from(el.client_height()),
    )
}

/// Measure the container behind `node`.
///
/// # Errors
///
/// Returns `CanvasError::ContainerNotMounted` before the element is in the DOM.
pub fn container_rect(node: NodeRef<Div>) -> Result<ContainerRect, CanvasError> {
    let el = node.get_untracked().ok_or(CanvasError::ContainerNotMounted)?;
    Ok(measure(&el))
}

/// RNG seed for the controller, mixed from wall-clock time and `Math.random`.
#[cfg(feature = "csr")]
pub fn entropy_seed() -> u64 {
    js_sys::Date::now().to_bits() ^ js_sys::Math::random().to_bits().rotate_left(32)
}
