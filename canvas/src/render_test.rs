#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::doc::Position;
use crate::geometry::Point;

fn core_with(shapes: &[(u128, Position, f64)]) -> EngineCore {
    let mut core = EngineCore::new(0);
    for (n, position, diameter) in shapes {
        core.doc.push(Shape { id: Uuid::from_u128(*n), diameter: *diameter, position: *position });
    }
    core
}

#[test]
fn empty_core_renders_nothing() {
    let core = EngineCore::new(0);
    assert!(shape_views(&core, &ContainerRect::sized(500.0, 500.0)).is_empty());
}

#[test]
fn views_follow_draw_order_with_indices() {
    let core = core_with(&[
        (1, Position::Pixels { top: 1.0, left: 2.0 }, 10.0),
        (2, Position::Pixels { top: 3.0, left: 4.0 }, 20.0),
    ]);
    let views = shape_views(&core, &ContainerRect::sized(500.0, 500.0));
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].id, Uuid::from_u128(1));
    assert_eq!(views[0].index, 0);
    assert_eq!(views[1].index, 1);
    assert_eq!(views[1].diameter, 20.0);
}

#[test]
fn pixel_view_style_uses_px() {
    let core = core_with(&[(1, Position::Pixels { top: 12.5, left: 40.0 }, 50.0)]);
    let view = &shape_views(&core, &ContainerRect::sized(500.0, 500.0))[0];
    assert_eq!((view.top, view.left), (12.5, 40.0));
    assert_eq!(view.style(), "width: 50px; height: 50px; top: 12.5px; left: 40px;");
}

#[test]
fn percent_view_resolves_pixels_and_keeps_percent_style() {
    let core = core_with(&[(1, Position::Percent { top: 10.0, left: 25.0 }, 30.0)]);
    let view = &shape_views(&core, &ContainerRect::sized(400.0, 200.0))[0];
    assert_eq!(view.top, 20.0);
    assert_eq!(view.left, 100.0);
    assert_eq!(view.style(), "width: 30px; height: 30px; top: 10%; left: 25%;");
}

#[test]
fn selection_reflected_in_view_and_class() {
    let mut core = core_with(&[
        (1, Position::Pixels { top: 0.0, left: 0.0 }, 10.0),
        (2, Position::Pixels { top: 0.0, left: 0.0 }, 10.0),
    ]);
    core.toggle_select(1);
    let views = shape_views(&core, &ContainerRect::sized(500.0, 500.0));
    assert!(!views[0].selected);
    assert_eq!(views[0].class(), "circle");
    assert!(views[1].selected);
    assert_eq!(views[1].class(), "circle selected");
}

#[test]
fn dragged_view_stays_inside_container() {
    let container = ContainerRect::sized(300.0, 300.0);
    let mut core = core_with(&[(1, Position::Pixels { top: 0.0, left: 0.0 }, 60.0)]);
    core.toggle_select(0);
    core.on_pointer_down(0, Point::new(30.0, 30.0), &container);
    core.on_pointer_move(Point::new(1_000.0, -1_000.0), &container);

    let view = &shape_views(&core, &container)[0];
    assert_eq!(view.top, 0.0);
    assert_eq!(view.left, 240.0);
    assert_eq!(view.style(), "width: 60px; height: 60px; top: 0%; left: 80%;");
}
