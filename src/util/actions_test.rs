use canvas::engine::{Action, EngineCore};
use canvas::geometry::ContainerRect;

use super::*;

#[test]
fn empty_actions_do_not_render() {
    assert!(!dispatch(&[]));
}

#[test]
fn render_needed_requests_redraw() {
    assert!(dispatch(&[Action::SelectionChanged, Action::RenderNeeded]));
}

#[test]
fn drag_bookkeeping_alone_does_not_render() {
    let mut core = EngineCore::new(0);
    let container = ContainerRect::sized(500.0, 500.0);
    core.add_shape(&container);
    core.toggle_select(0);
    let origin = core.shapes()[0].client_origin(&container);
    let started = core.on_pointer_down(0, origin, &container);
    assert!(!dispatch(&started));
    assert!(!dispatch(&core.on_pointer_up()));
}

#[test]
fn controller_mutations_render() {
    let mut core = EngineCore::new(0);
    let container = ContainerRect::sized(500.0, 500.0);
    assert!(dispatch(&core.add_shape(&container)));
    assert!(dispatch(&core.toggle_select(0)));
}
