//! Host-side handling of controller actions.

use canvas::engine::Action;

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

/// Log each action and report whether the view must be redrawn.
///
/// Used as the body of `RwSignal::maybe_update`, so subscribers are only
/// notified when the controller actually changed something visible.
pub fn dispatch(actions: &[Action]) -> bool {
    let mut render = false;
    for action in actions {
        match action {
            Action::ShapeCreated(shape) => log::debug!("circle {} created", shape.id),
            Action::ShapesMoved { ids } => log::trace!("{} circle(s) moved", ids.len()),
            Action::ShapesDeleted { ids } => log::info!("{} circle(s) deleted", ids.len()),
            Action::SelectionChanged => log::trace!("selection changed"),
            Action::DragStarted { anchor } => log::debug!("drag started on {anchor}"),
            Action::DragEnded { anchor } => log::debug!("drag ended on {anchor}"),
            Action::RenderNeeded => render = true,
        }
    }
    render
}
