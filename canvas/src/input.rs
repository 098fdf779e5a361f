//! Input model: keys, the selection set, and the drag state machine.
//!
//! `UiState` is the persistent interaction state the renderer reads (which
//! shapes are selected). `InputState` is the gesture tracked between a
//! pointer-down on a selected shape and the next pointer-up; it carries the
//! pointer offsets needed to keep the grab point under the cursor.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::collections::{HashMap, HashSet};

use crate::doc::ShapeId;
use crate::geometry::Point;

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"Backspace"`, `"Delete"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Ids of the currently selected shapes.
    pub selected: HashSet<ShapeId>,
}

impl UiState {
    /// Flip membership of `id`. Returns `true` if it is selected afterwards.
    pub fn toggle(&mut self, id: ShapeId) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    #[must_use]
    pub fn is_selected(&self, id: &ShapeId) -> bool {
        self.selected.contains(id)
    }
}

/// Internal state for the drag state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for a pointer-down on a selected shape.
    #[default]
    Idle,
    /// The selection is following the pointer.
    Dragging {
        /// Shape the pointer went down on.
        anchor: ShapeId,
        /// Pointer position minus the anchor's client top-left at drag start.
        offset: Point,
        /// Per-shape offsets for every shape selected at drag start. Only
        /// consulted when the group keeps its relative spacing.
        offsets: HashMap<ShapeId, Point>,
    },
}

impl InputState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// The grabbed shape, if a drag is in progress.
    #[must_use]
    pub fn anchor(&self) -> Option<ShapeId> {
        match self {
            Self::Idle => None,
            Self::Dragging { anchor, .. } => Some(*anchor),
        }
    }
}
