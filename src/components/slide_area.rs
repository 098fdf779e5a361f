//! The bounded region where circles live.
//!
//! ARCHITECTURE
//! ============
//! Per-circle `mousedown` / `click` handlers are attached to each rendered
//! circle. `mousemove`, `mouseup` and `keydown` are listened for on the window
//! so a drag keeps tracking when the pointer leaves the container. Those three
//! listeners are attached once when the component mounts and removed in its
//! cleanup; they read the controller through the signal at event time, so no
//! re-binding is needed when selection or drag state changes.

use canvas::engine::EngineCore;
use canvas::input::Key;
use canvas::render::shape_views;
use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;

use crate::util::actions::dispatch;
use crate::util::dom_input::{client_point, container_rect};

/// Slide area component.
///
/// `container` is the node ref the rest of the app measures for geometry.
#[component]
pub fn SlideArea(container: NodeRef<Div>) -> impl IntoView {
    let engine = expect_context::<RwSignal<EngineCore>>();

    let handles = [
        window_event_listener(ev::mousemove, move |ev| {
            if !engine.with_untracked(EngineCore::is_dragging) {
                return;
            }
            match container_rect(container) {
                Ok(rect) => {
                    let pointer = client_point(ev.client_x(), ev.client_y());
                    engine.maybe_update(|core| dispatch(&core.on_pointer_move(pointer, &rect)));
                }
                Err(err) => log::warn!("drag move skipped: {err}"),
            }
        }),
        window_event_listener(ev::mouseup, move |_| {
            engine.maybe_update(|core| dispatch(&core.on_pointer_up()));
        }),
        window_event_listener(ev::keydown, move |ev| {
            let key = Key::new(ev.key());
            engine.maybe_update(|core| {
                let actions = core.on_key_down(&key);
                if !actions.is_empty() {
                    // Backspace must not navigate away once it has deleted circles.
                    ev.prevent_default();
                }
                dispatch(&actions)
            });
        }),
    ];
    on_cleanup(move || {
        for handle in handles {
            handle.remove();
        }
        log::debug!("slide area listeners removed");
    });

    let circles = move || {
        let rect = container_rect(container).unwrap_or_default();
        engine
            .with(|core| shape_views(core, &rect))
            .into_iter()
            .map(|shape| {
                let index = shape.index;
                view! {
                    <div
                        class=shape.class()
                        style=shape.style()
                        on:mousedown=move |ev| match container_rect(container) {
                            Ok(rect) => {
                                let pointer = client_point(ev.client_x(), ev.client_y());
                                engine.maybe_update(|core| dispatch(&core.on_pointer_down(index, pointer, &rect)));
                            }
                            Err(err) => log::warn!("drag start skipped: {err}"),
                        }
                        on:click=move |_| {
                            engine.maybe_update(|core| dispatch(&core.toggle_select(index)));
                        }
                    ></div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="slide-area" node_ref=container>
            {circles}
        </div>
    }
}
