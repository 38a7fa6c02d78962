//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, and the app
//! catalog. UI composition stays in [`crate::components`].

use desktop_app_contract::{AppCommand, AppServices};
use leptos::*;

use crate::{
    apps::{self, AppDescriptor},
    effect_executor,
    model::{AppId, DesktopState, WindowId},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// App catalog decoded at boot.
    pub catalog: StoredValue<Vec<AppDescriptor>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Catalog entry for `app_id`, if the catalog decoded.
    pub fn descriptor(&self, app_id: AppId) -> Option<AppDescriptor> {
        self.catalog.with_value(|catalog| {
            catalog
                .iter()
                .find(|descriptor| descriptor.app_id == app_id)
                .cloned()
        })
    }

    /// Builds the service bundle handed to the app mounted in `window_id`.
    pub fn app_services(&self, window_id: WindowId) -> AppServices {
        let runtime = *self;
        let sender = Callback::new(move |command: AppCommand| {
            runtime.dispatch_action(action_for_command(window_id, command));
        });
        let balance = create_memo(move |_| runtime.state.with(|state| state.casino_balance));
        let has_played = create_memo(move |_| runtime.state.with(|state| state.has_played_casino));
        AppServices::new(sender, balance.into(), has_played.into())
    }
}

/// Translates an app command from `window_id` into the reducer action it stands for.
pub fn action_for_command(window_id: WindowId, command: AppCommand) -> DesktopAction {
    match command {
        AppCommand::CloseWindow => DesktopAction::CloseWindow { window_id },
        AppCommand::UpdateBalance { delta } => DesktopAction::UpdateBalance { delta },
        AppCommand::MarkCasinoPlayed => DesktopAction::MarkCasinoPlayed,
        AppCommand::TriggerExplosion => DesktopAction::TriggerExplosion,
    }
}

/// Applies one action to the state signal and queues any effects it emitted.
pub(crate) fn apply_action(
    state: RwSignal<DesktopState>,
    effects: RwSignal<Vec<RuntimeEffect>>,
    action: DesktopAction,
) {
    let mut desktop = state.get_untracked();
    let previous = desktop.clone();

    match reduce_desktop(&mut desktop, action) {
        Ok(new_effects) => {
            if desktop != previous {
                state.set(desktop);
            }
            if !new_effects.is_empty() {
                let mut queue = effects.get_untracked();
                queue.extend(new_effects);
                effects.set(queue);
            }
        }
        Err(err) => logging::warn!("desktop reducer error: {err}"),
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let state = create_rw_signal(DesktopState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let catalog = store_value(match apps::app_catalog() {
        Ok(catalog) => catalog,
        Err(err) => {
            logging::warn!("app catalog unavailable: {err}");
            Vec::new()
        }
    });

    let dispatch = Callback::new(move |action: DesktopAction| apply_action(state, effects, action));

    let runtime = DesktopRuntimeContext {
        state,
        effects,
        catalog,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::GamePhase;

    #[test]
    fn app_commands_map_onto_window_scoped_actions() {
        let window_id = WindowId(7);
        assert_eq!(
            action_for_command(window_id, AppCommand::CloseWindow),
            DesktopAction::CloseWindow { window_id }
        );
        assert_eq!(
            action_for_command(window_id, AppCommand::UpdateBalance { delta: -5.0 }),
            DesktopAction::UpdateBalance { delta: -5.0 }
        );
        assert_eq!(
            action_for_command(window_id, AppCommand::TriggerExplosion),
            DesktopAction::TriggerExplosion
        );
    }

    #[test]
    fn apply_action_queues_effects_and_skips_failed_actions() {
        let runtime = create_runtime();
        let state = create_rw_signal(DesktopState::default());
        let effects = create_rw_signal(Vec::new());

        apply_action(state, effects, DesktopAction::TriggerExplosion);
        assert_eq!(state.get_untracked().game_phase, GamePhase::Normal);
        assert!(effects.get_untracked().is_empty());

        apply_action(state, effects, DesktopAction::OpenApp { app_id: AppId::Casino });
        let window_id = state.get_untracked().windows[0].id;
        assert_eq!(
            effects.get_untracked(),
            vec![RuntimeEffect::FocusWindowInput(window_id)]
        );

        runtime.dispose();
    }
}
