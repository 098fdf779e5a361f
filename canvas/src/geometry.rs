#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point in client (viewport) or container space, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Measured bounds of the container element, in client coordinates.
///
/// `left` / `top` locate the container's origin in the viewport; `width` /
/// `height` are its inner dimensions. All values are CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// A container anchored at the viewport origin.
    #[must_use]
    pub fn sized(width: f64, height: f64) -> Self {
        Self { left: 0.0, top: 0.0, width, height }
    }

    /// Client-space origin (top-left corner) of the container.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Convert a client-space point to container-local pixels.
    #[must_use]
    pub fn client_to_local(&self, client: Point) -> Point {
        Point::new(client.x - self.left, client.y - self.top)
    }

    /// Convert a container-local point to client space.
    #[must_use]
    pub fn local_to_client(&self, local: Point) -> Point {
        Point::new(local.x + self.left, local.y + self.top)
    }
}

/// Largest offset at which an item of `size` still fits inside `extent`.
///
/// Collapses to zero when the item is larger than the extent, so the clamp
/// range below is never inverted.
#[must_use]
pub fn max_offset(extent: f64, size: f64) -> f64 {
    (extent - size).max(0.0)
}

/// Clamp `value` into `[0, extent - size]`.
#[must_use]
pub fn clamp_into(value: f64, extent: f64, size: f64) -> f64 {
    value.clamp(0.0, max_offset(extent, size))
}

/// Express `px` as a percentage of `extent`. A zero extent maps to 0%.
#[must_use]
pub fn to_percent(px: f64, extent: f64) -> f64 {
    if extent <= 0.0 { 0.0 } else { px * 100.0 / extent }
}

/// Resolve a percentage of `extent` back to pixels.
#[must_use]
pub fn from_percent(pct: f64, extent: f64) -> f64 {
    pct * extent / 100.0
}
