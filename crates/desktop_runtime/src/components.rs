//! Desktop shell UI composition: menubar, active window, dock, and takeover overlays.

mod dock;
mod takeover;
mod window;

use std::time::Duration;

use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::*;

use self::{dock::Dock, takeover::TakeoverLayer, window::DesktopWindow};
use crate::{
    apps,
    model::{GamePhase, WindowId},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

const CLOCK_REFRESH: Duration = Duration::from_secs(15);

/// DOM id of a window's frame element.
pub fn window_dom_id(window_id: WindowId) -> String {
    format!("desktop-window-{}", window_id.0)
}

/// Menubar clock text, `HH:MM`.
pub fn format_clock(hours: u32, minutes: u32) -> String {
    format!("{hours:02}:{minutes:02}")
}

fn current_clock() -> String {
    let now = js_sys::Date::new_0();
    format_clock(now.get_hours(), now.get_minutes())
}

#[component]
fn MenubarClock() -> impl IntoView {
    let clock = create_rw_signal(current_clock());
    let timer = store_value(None::<IntervalHandle>);
    match set_interval_with_handle(move || clock.set(current_clock()), CLOCK_REFRESH) {
        Ok(handle) => timer.set_value(Some(handle)),
        Err(err) => logging::warn!("menubar clock timer failed: {err:?}"),
    }
    on_cleanup(move || {
        if let Some(handle) = timer.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    });

    view! { <span class="desktop-clock">{move || clock.get()}</span> }
}

#[component]
/// Renders the desktop: menubar, the active window, the dock, and any takeover overlay.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let active_window = create_memo(move |_| {
        runtime
            .state
            .with(|desktop| desktop.active_window().map(|window| window.id))
    });
    let phase_token = move || match runtime.state.with(|desktop| desktop.game_phase) {
        GamePhase::Normal => "normal",
        GamePhase::Exploding => "exploding",
        GamePhase::Dino => "dino",
    };

    view! {
        <div class="desktop-shell" data-phase=phase_token>
            <div class="desktop-screen">
                <header class="desktop-menubar">
                    <span class="desktop-os-name">"mTOS 15.0"</span>
                    <MenubarClock />
                </header>
                <main class="desktop-window-layer">
                    {move || {
                        active_window
                            .get()
                            .map(|window_id| view! { <DesktopWindow window_id=window_id /> })
                    }}
                </main>
                <footer class="desktop-dock-bar">
                    <Dock />
                </footer>
            </div>
            <TakeoverLayer />
        </div>
    }
}
