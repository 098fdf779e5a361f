//! Document model: shapes, their positions, and the ordered in-memory store.
//!
//! A shape's position starts out in container pixels when it is generated and
//! switches to percentages of the container once it has been dragged, so that
//! dragged shapes keep their relative place when the container is resized.
//! `Position::resolve` turns either form into pixels for geometry and drawing.
//!
//! `ShapeStore` keeps shapes in creation order. Indices into that order are
//! what the host sees (one rendered element per shape); ids are what the
//! controller keys selection and drag state on.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::{ContainerRect, Point, from_percent, to_percent};

/// Unique identifier for a shape.
pub type ShapeId = Uuid;

/// Top-left corner of a shape relative to the container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "lowercase")]
pub enum Position {
    /// Absolute offsets in container pixels.
    Pixels { top: f64, left: f64 },
    /// Offsets as percentages of container height (`top`) and width (`left`).
    Percent { top: f64, left: f64 },
}

impl Position {
    /// Store a container-local pixel position as percentages of `container`.
    #[must_use]
    pub fn percent_of(local: Point, container: &ContainerRect) -> Self {
        Self::Percent {
            top: to_percent(local.y, container.height),
            left: to_percent(local.x, container.width),
        }
    }

    /// Resolve to container-local pixels (`x` = left, `y` = top).
    #[must_use]
    pub fn resolve(&self, container: &ContainerRect) -> Point {
        match *self {
            Self::Pixels { top, left } => Point::new(left, top),
            Self::Percent { top, left } => {
                Point::new(from_percent(left, container.width), from_percent(top, container.height))
            }
        }
    }

    /// CSS length unit for this position's stored values.
    #[must_use]
    pub fn css_unit(&self) -> &'static str {
        match self {
            Self::Pixels { .. } => "px",
            Self::Percent { .. } => "%",
        }
    }

    /// Raw stored `(top, left)` values in this position's unit.
    #[must_use]
    pub fn raw(&self) -> (f64, f64) {
        match *self {
            Self::Pixels { top, left } | Self::Percent { top, left } => (top, left),
        }
    }
}

/// A circle on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    /// Diameter in CSS pixels; fixed at creation.
    pub diameter: f64,
    pub position: Position,
}

impl Shape {
    /// Client-space top-left corner of the shape inside `container`.
    #[must_use]
    pub fn client_origin(&self, container: &ContainerRect) -> Point {
        container.local_to_client(self.position.resolve(container))
    }
}

/// Ordered store of live shapes.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
}

impl ShapeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Append a shape at the end of the draw order.
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Shape at `index` in creation order.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    #[must_use]
    pub fn get(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == *id)
    }

    pub fn get_mut(&mut self, id: &ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id == *id)
    }

    /// Current index of the shape with `id`.
    #[must_use]
    pub fn index_of(&self, id: &ShapeId) -> Option<usize> {
        self.shapes.iter().position(|s| s.id == *id)
    }

    /// Keep only shapes for which `keep` returns true, returning the ids of
    /// the removed shapes in their former order.
    pub fn retain<F>(&mut self, mut keep: F) -> Vec<ShapeId>
    where
        F: FnMut(&Shape) -> bool,
    {
        let mut removed = Vec::new();
        self.shapes.retain(|s| {
            let k = keep(s);
            if !k {
                removed.push(s.id);
            }
            k
        });
        removed
    }

    /// All shapes in creation order.
    #[must_use]
    pub fn as_slice(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
