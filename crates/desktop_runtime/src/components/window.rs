use desktop_app_contract::AppMountContext;
use leptos::ev::MouseEvent;
use system_ui::{WindowBody, WindowFrame};

use super::*;

#[component]
/// Chrome around one app instance. The app is mounted once, for the lifetime of this view.
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let Some(record) = runtime
        .state
        .with_untracked(|desktop| desktop.window(window_id).cloned())
    else {
        return View::default();
    };

    let title = runtime
        .descriptor(record.app_id)
        .map(|descriptor| descriptor.window_title)
        .unwrap_or_else(|| record.app_id.manifest_id().to_string());
    let focused =
        Signal::derive(move || runtime.state.with(|desktop| desktop.is_focused(window_id)));
    let z_index = create_memo(move |_| {
        runtime.state.with(|desktop| {
            desktop
                .window(window_id)
                .map(|window| window.z_index)
                .unwrap_or_default()
        })
    });

    let services = runtime.app_services(window_id);
    let close = Callback::new(move |ev: MouseEvent| {
        ev.stop_propagation();
        services.window.close();
    });
    let focus = Callback::new(move |_: web_sys::PointerEvent| {
        if !focused.get_untracked() {
            runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
        }
    });

    let contents = apps::app_module(record.app_id).mount(AppMountContext { services });

    view! {
        <WindowFrame
            title=title
            layout_class="desktop-window"
            dom_id=window_dom_id(window_id)
            style=Signal::derive(move || format!("z-index:{};", z_index.get()))
            focused=focused
            on_close=close
            on_pointerdown=focus
        >
            <WindowBody>{contents}</WindowBody>
        </WindowFrame>
    }
    .into_view()
}
