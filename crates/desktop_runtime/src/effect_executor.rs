//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::{
    components::window_dom_id,
    model::{GamePhase, WindowId},
    reducer::RuntimeEffect,
    runtime_context::DesktopRuntimeContext,
};

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear the current queue before processing so nested dispatches enqueue a fresh batch instead
    // of being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_runtime_effect(effect);
        }
    });
}

fn run_runtime_effect(effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::FocusWindowInput(window_id) => {
            // The window body may mount in the same tick as the action.
            request_animation_frame(move || {
                focus_window_primary_control(window_id);
            });
        }
        RuntimeEffect::SetPageScrollLocked(locked) => set_page_scroll_locked(locked),
        RuntimeEffect::PhaseEntered(phase) => match phase {
            GamePhase::Normal => {}
            GamePhase::Exploding => logging::log!("takeover started: withdrawing casino balance"),
            GamePhase::Dino => logging::log!("takeover finished: runner game shown"),
        },
    }
}

/// Focuses the first enabled text input in a window body, falling back to its first button.
fn focus_window_primary_control(window_id: WindowId) -> bool {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return false;
    };
    let body = format!("#{} .ui-window-body", window_dom_id(window_id));
    ["input:not([disabled])", "button:not([disabled])"]
        .iter()
        .find_map(|control| {
            document
                .query_selector(&format!("{body} {control}"))
                .ok()
                .flatten()
                .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
        })
        .map(|element| element.focus().is_ok())
        .unwrap_or(false)
}

fn set_page_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(err) = result {
        logging::warn!("page scroll lock failed: {err:?}");
    }
}
