//! Root application component.

use canvas::config::CanvasConfig;
use canvas::engine::EngineCore;
use leptos::html::Div;
use leptos::prelude::*;

use crate::components::slide_area::SlideArea;
use crate::util::actions::dispatch;
use crate::util::dom_input::container_rect;

/// Spawn one circle into the container, if it is mounted.
fn add_circle(engine: RwSignal<EngineCore>, container: NodeRef<Div>) {
    match container_rect(container) {
        Ok(rect) => {
            engine.maybe_update(|core| dispatch(&core.add_shape(&rect)));
        }
        Err(err) => log::warn!("add circle skipped: {err}"),
    }
}

/// Root application component.
///
/// Owns the controller as a reactive signal and provides it to the slide area.
#[component]
pub fn App(config: CanvasConfig, seed: u64) -> impl IntoView {
    let engine = RwSignal::new(EngineCore::with_config(config, seed));
    provide_context(engine);
    let container = NodeRef::<Div>::new();

    view! {
        <div class="container">
            <button class="but" on:click=move |_| add_circle(engine, container)>
                "Add circle"
            </button>
            <SlideArea container/>
        </div>
    }
}
