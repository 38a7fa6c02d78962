use system_ui::DockButton;

use super::*;

#[component]
/// App launcher strip. Each button opens its app or raises the existing window.
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let entries = runtime.catalog.get_value();

    view! {
        <nav class="desktop-dock" aria-label="Dock">
            {entries
                .into_iter()
                .map(|entry| {
                    let app_id = entry.app_id;
                    let open = Signal::derive(move || {
                        runtime.state.with(|desktop| desktop.window_for_app(app_id).is_some())
                    });
                    view! {
                        <DockButton
                            icon=entry.dock_icon
                            label=entry.display_name
                            active=open
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(DesktopAction::OpenApp { app_id })
                            })
                        />
                    }
                })
                .collect_view()}
        </nav>
    }
}
