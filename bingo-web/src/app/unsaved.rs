use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Arms a `beforeunload` prompt while the board has unsaved edits, so
/// closing the tab cannot silently discard them.
#[hook]
pub fn use_unsaved_changes_guard(unsaved: bool) {
    use_effect_with(unsaved, |unsaved| {
        let armed = *unsaved;
        let closure = Closure::<dyn FnMut(web_sys::BeforeUnloadEvent)>::new(
            move |e: web_sys::BeforeUnloadEvent| {
                if armed {
                    e.prevent_default();
                    e.set_return_value("");
                }
            },
        );
        let window = web_sys::window();
        if let Some(window) = &window {
            let _ = window.add_event_listener_with_callback(
                "beforeunload",
                closure.as_ref().unchecked_ref(),
            );
        }
        move || {
            if let Some(window) = window {
                let _ = window.remove_event_listener_with_callback(
                    "beforeunload",
                    closure.as_ref().unchecked_ref(),
                );
            }
        }
    });
}
