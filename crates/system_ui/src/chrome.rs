//! Window chrome, dock, and overlay primitives.

use leptos::ev::MouseEvent;
use leptos::*;

fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[component]
/// Shared window frame: traffic-light titlebar plus a body slot.
pub fn WindowFrame(
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] dom_id: Option<String>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional, into)] focused: MaybeSignal<bool>,
    #[prop(optional)] on_close: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    let aria_title = title.clone();
    view! {
        <section
            class=merge_layout_class("ui-window-frame", layout_class)
            id=dom_id
            style=move || style.get()
            role="dialog"
            aria-label=move || aria_title.get()
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-ui-focused=move || bool_token(focused.get())
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        >
            <header class="ui-window-titlebar" data-ui-kind="window-titlebar">
                <WindowCloseButton on_click=on_close />
                <span class="ui-window-light" data-ui-light="minimize" aria-hidden="true"></span>
                <span class="ui-window-light" data-ui-light="zoom" aria-hidden="true"></span>
                <span class="ui-window-title" data-ui-kind="window-title">
                    {move || title.get()}
                </span>
            </header>
            {children()}
        </section>
    }
}

#[component]
/// Red close light in the window titlebar.
pub fn WindowCloseButton(
    #[prop(optional_no_strip)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-window-light"
            data-ui-light="close"
            aria-label="Close window"
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <span aria-hidden="true">"×"</span>
        </button>
    }
}

#[component]
/// Shared window body primitive.
pub fn WindowBody(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-body", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-body"
        >
            {children()}
        </div>
    }
}

#[component]
/// Dock launcher button with a hover label.
pub fn DockButton(
    #[prop(into)] icon: String,
    #[prop(into)] label: String,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    on_click: Callback<MouseEvent>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-dock-button"
            title=label.clone()
            aria-label=label.clone()
            data-ui-primitive="true"
            data-ui-kind="dock-button"
            data-ui-active=move || bool_token(active.get())
            on:click=move |ev| on_click.call(ev)
        >
            <span class="ui-dock-icon" aria-hidden="true">{icon}</span>
            <span class="ui-dock-label">{label}</span>
        </button>
    }
}

#[component]
/// Fixed full-viewport layer used by takeover screens.
pub fn FullScreenOverlay(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] shaking: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-fullscreen-overlay", layout_class)
            data-ui-primitive="true"
            data-ui-kind="fullscreen-overlay"
            data-ui-shaking=move || bool_token(shaking.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}
