use std::collections::HashMap;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use uuid::Builder;

use crate::config::{CanvasConfig, GroupDrag};
use crate::doc::{Position, Shape, ShapeId, ShapeStore};
use crate::geometry::{ContainerRect, Point, clamp_into, max_offset};
use crate::input::{InputState, Key, UiState};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ShapeCreated(Shape),
    ShapesMoved { ids: Vec<ShapeId> },
    ShapesDeleted { ids: Vec<ShapeId> },
    SelectionChanged,
    DragStarted { anchor: ShapeId },
    DragEnded { anchor: ShapeId },
    RenderNeeded,
}

/// The canvas controller: owns shapes, selection, and the drag session.
///
/// Every handler reads the state it needs at call time and mutates it in
/// place, so the host can register its listeners once and forward events
/// without re-binding them when state changes. Geometry that depends on the
/// page layout (the container's client rect) is passed in per call.
pub struct EngineCore {
    pub doc: ShapeStore,
    pub ui: UiState,
    pub input: InputState,
    config: CanvasConfig,
    rng: SmallRng,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(0)
    }
}

impl EngineCore {
    /// Create a controller with default config and an RNG seeded by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(CanvasConfig::default(), seed)
    }

    #[must_use]
    pub fn with_config(config: CanvasConfig, seed: u64) -> Self {
        Self {
            doc: ShapeStore::new(),
            ui: UiState::default(),
            input: InputState::default(),
            config,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    // --- Shape creation ---

    /// Spawn a randomly sized circle at a random position fully inside `container`.
    pub fn add_shape(&mut self, container: &ContainerRect) -> Vec<Action> {
        // A circle taller than the container cannot be contained; cap at its height.
        let max = (self.config.max_diameter_ratio * container.width).min(container.height);
        let min = (self.config.min_diameter_ratio * container.width).min(max);
        let diameter = self.rng.random_range(min..=max);
        let top = self.rng.random_range(0.0..=max_offset(container.height, diameter));
        let left = self.rng.random_range(0.0..=max_offset(container.width, diameter));

        let shape = Shape {
            id: Builder::from_random_bytes(self.rng.random()).into_uuid(),
            diameter,
            position: Position::Pixels { top, left },
        };
        log::debug!("shape created: id={} diameter={diameter:.1} top={top:.1} left={left:.1}", shape.id);
        self.doc.push(shape.clone());
        vec![Action::ShapeCreated(shape), Action::RenderNeeded]
    }

    // --- Pointer / keyboard ---

    /// Pointer pressed on the shape at `index`. Starts a drag if that shape is selected.
    pub fn on_pointer_down(&mut self, index: usize, pointer: Point, container: &ContainerRect) -> Vec<Action> {
        let Some(anchor) = self.doc.at(index) else {
            return Vec::new();
        };
        if !self.ui.is_selected(&anchor.id) {
            return Vec::new();
        }

        let grab = |shape: &Shape| {
            let origin = shape.client_origin(container);
            Point::new(pointer.x - origin.x, pointer.y - origin.y)
        };
        let offset = grab(anchor);
        let offsets: HashMap<ShapeId, Point> = self
            .doc
            .iter()
            .filter(|s| self.ui.is_selected(&s.id))
            .map(|s| (s.id, grab(s)))
            .collect();

        let anchor = anchor.id;
        log::debug!("drag started: anchor={anchor} selected={}", offsets.len());
        self.input = InputState::Dragging { anchor, offset, offsets };
        vec![Action::DragStarted { anchor }]
    }

    /// Pointer moved anywhere in the viewport. Repositions the selection while dragging.
    pub fn on_pointer_move(&mut self, pointer: Point, container: &ContainerRect) -> Vec<Action> {
        let InputState::Dragging { offset, offsets, .. } = &self.input else {
            return Vec::new();
        };

        let mut moved = Vec::new();
        for id in self.selected_ids() {
            let grab = match self.config.group_drag {
                GroupDrag::Align => *offset,
                GroupDrag::Preserve => offsets.get(&id).copied().unwrap_or(*offset),
            };
            let Some(shape) = self.doc.get_mut(&id) else {
                continue;
            };
            let local = container.client_to_local(Point::new(pointer.x - grab.x, pointer.y - grab.y));
            let clamped = Point::new(
                clamp_into(local.x, container.width, shape.diameter),
                clamp_into(local.y, container.height, shape.diameter),
            );
            shape.position = Position::percent_of(clamped, container);
            moved.push(id);
        }

        if moved.is_empty() {
            return Vec::new();
        }
        vec![Action::ShapesMoved { ids: moved }, Action::RenderNeeded]
    }

    /// Pointer released anywhere in the viewport. Always ends the drag session.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        let ended = std::mem::take(&mut self.input).anchor();
        match ended {
            Some(anchor) => {
                log::debug!("drag ended: anchor={anchor}");
                vec![Action::DragEnded { anchor }]
            }
            None => Vec::new(),
        }
    }

    /// Key pressed anywhere in the viewport. A delete key removes the selection.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if !self.config.is_delete_key(key.name()) || self.ui.selected.is_empty() {
            return Vec::new();
        }

        let selected = std::mem::take(&mut self.ui.selected);
        let removed = self.doc.retain(|s| !selected.contains(&s.id));
        if self.input.anchor().is_some_and(|a| selected.contains(&a)) {
            self.input = InputState::Idle;
        }
        log::debug!("shapes deleted: count={} remaining={}", removed.len(), self.doc.len());
        vec![Action::ShapesDeleted { ids: removed }, Action::SelectionChanged, Action::RenderNeeded]
    }

    /// Click on the shape at `index`: flip its selection.
    pub fn toggle_select(&mut self, index: usize) -> Vec<Action> {
        let Some(id) = self.doc.at(index).map(|s| s.id) else {
            return Vec::new();
        };
        self.ui.toggle(id);
        vec![Action::SelectionChanged, Action::RenderNeeded]
    }

    // --- Queries ---

    /// All shapes in creation (and draw) order.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        self.doc.as_slice()
    }

    #[must_use]
    pub fn shape(&self, id: &ShapeId) -> Option<&Shape> {
        self.doc.get(id)
    }

    #[must_use]
    pub fn shape_at(&self, index: usize) -> Option<&Shape> {
        self.doc.at(index)
    }

    #[must_use]
    pub fn index_of(&self, id: &ShapeId) -> Option<usize> {
        self.doc.index_of(id)
    }

    /// Selected ids in shape order.
    #[must_use]
    pub fn selected_ids(&self) -> Vec<ShapeId> {
        self.doc
            .iter()
            .filter(|s| self.ui.is_selected(&s.id))
            .map(|s| s.id)
            .collect()
    }

    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.doc.at(index).is_some_and(|s| self.ui.is_selected(&s.id))
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }

    #[must_use]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.doc.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.doc.is_empty()
    }
}
