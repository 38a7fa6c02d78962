//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use thiserror::Error;

use crate::{
    ledger,
    model::{AppId, DesktopState, GamePhase, WindowId},
    window_manager,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open an app, or raise its window when one already exists.
    OpenApp {
        /// App to open.
        app_id: AppId,
    },
    /// Close a window by id. Unknown ids are ignored.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Focus (and raise) a window by id. Unknown ids are ignored.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Add a signed amount to the casino balance, clamped at zero.
    UpdateBalance {
        /// Signed balance change.
        delta: f64,
    },
    /// Record that at least one ball has been dropped.
    MarkCasinoPlayed,
    /// Start the withdraw takeover (`Normal -> Exploding`).
    TriggerExplosion,
    /// Finish the explosion and hand over to the runner game (`Exploding -> Dino`).
    ShowDinoGame,
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Move focus into the newly focused window's primary input.
    FocusWindowInput(WindowId),
    /// Lock or unlock page scrolling while a full-screen overlay is showing.
    SetPageScrollLocked(bool),
    /// Announce a takeover phase change.
    PhaseEntered(GamePhase),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for gated transitions.
pub enum ReducerError {
    /// Withdrawal was requested before any ball was dropped.
    #[error("cannot withdraw before playing the casino")]
    CasinoNotPlayed,
    /// The runner was requested before the explosion started.
    #[error("runner requested before the takeover started")]
    TakeoverNotStarted,
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// Window actions are total: referencing a missing window leaves the state untouched. Only the
/// takeover transitions are gated and can fail.
///
/// # Errors
///
/// Returns [`ReducerError::CasinoNotPlayed`] for a withdrawal before any play, and
/// [`ReducerError::TakeoverNotStarted`] when the runner is requested from the normal phase.
pub fn reduce_desktop(
    state: &mut DesktopState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenApp { app_id } => {
            let window_id = window_manager::open_or_raise(state, app_id);
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::CloseWindow { window_id } => {
            let was_focused = state.is_focused(window_id);
            if window_manager::close_window(state, window_id) && was_focused {
                if let Some(next) = state.focused_window_id {
                    effects.push(RuntimeEffect::FocusWindowInput(next));
                }
            }
        }
        DesktopAction::FocusWindow { window_id } => {
            if window_manager::raise_window(state, window_id) {
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::UpdateBalance { delta } => {
            ledger::apply_balance_delta(state, delta);
        }
        DesktopAction::MarkCasinoPlayed => {
            ledger::mark_played(state);
        }
        DesktopAction::TriggerExplosion => {
            if state.game_phase == GamePhase::Normal && !state.has_played_casino {
                return Err(ReducerError::CasinoNotPlayed);
            }
            if ledger::advance_phase(state, GamePhase::Exploding) {
                effects.push(RuntimeEffect::SetPageScrollLocked(true));
                effects.push(RuntimeEffect::PhaseEntered(GamePhase::Exploding));
            }
        }
        DesktopAction::ShowDinoGame => {
            if state.game_phase == GamePhase::Normal {
                return Err(ReducerError::TakeoverNotStarted);
            }
            if ledger::advance_phase(state, GamePhase::Dino) {
                effects.push(RuntimeEffect::PhaseEntered(GamePhase::Dino));
            }
        }
    }

    Ok(effects)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn open(state: &mut DesktopState, app_id: AppId) -> WindowId {
        reduce_desktop(state, DesktopAction::OpenApp { app_id }).expect("open app");
        state.focused_window_id.expect("focused window")
    }

    fn assert_registry_invariants(state: &DesktopState) {
        if let Some(focused) = state.focused_window_id {
            assert!(state.window(focused).is_some(), "focus points at a closed window");
        }
        for window in &state.windows {
            assert!(window.z_index <= state.z_index_counter);
        }
        for app_id in AppId::ALL {
            let count = state.windows.iter().filter(|w| w.app_id == app_id).count();
            assert!(count <= 1, "{app_id:?} has {count} windows");
        }
    }

    #[test]
    fn open_app_focuses_new_window_and_bumps_counter() {
        let mut state = DesktopState::default();

        let first = open(&mut state, AppId::Terminal);
        let second = open(&mut state, AppId::Casino);

        assert_eq!(state.focused_window_id, Some(second));
        assert_eq!(state.windows.len(), 2);
        assert_eq!(state.windows[0].id, first);
        assert_eq!(state.windows[0].z_index, 2);
        assert_eq!(state.windows[1].z_index, 3);
        assert_eq!(state.z_index_counter, 3);
        assert_eq!(state.active_window().map(|w| w.id), Some(second));
    }

    #[test]
    fn reopening_an_app_raises_instead_of_duplicating() {
        let mut state = DesktopState::default();

        let terminal = open(&mut state, AppId::Terminal);
        open(&mut state, AppId::ChatGbt);
        let effects = reduce_desktop(
            &mut state,
            DesktopAction::OpenApp {
                app_id: AppId::Terminal,
            },
        )
        .unwrap();

        assert_eq!(state.windows.len(), 2);
        assert_eq!(state.focused_window_id, Some(terminal));
        assert_eq!(state.window(terminal).unwrap().z_index, 4);
        assert_eq!(state.active_window().map(|w| w.id), Some(terminal));
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(terminal)]);
    }

    #[test]
    fn repeated_opens_keep_one_window_per_app() {
        let mut state = DesktopState::default();
        let sequence = [
            AppId::Casino,
            AppId::Terminal,
            AppId::Casino,
            AppId::ChatGbt,
            AppId::Terminal,
            AppId::Casino,
            AppId::ChatGbt,
        ];
        for app_id in sequence {
            open(&mut state, app_id);
            assert_registry_invariants(&state);
        }
        assert_eq!(state.windows.len(), 3);
    }

    #[test]
    fn closing_focused_window_falls_back_to_latest_survivor() {
        let mut state = DesktopState::default();

        let terminal = open(&mut state, AppId::Terminal);
        let chat = open(&mut state, AppId::ChatGbt);
        let casino = open(&mut state, AppId::Casino);

        let effects =
            reduce_desktop(&mut state, DesktopAction::CloseWindow { window_id: casino }).unwrap();
        assert_eq!(state.focused_window_id, Some(chat));
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(chat)]);

        reduce_desktop(&mut state, DesktopAction::CloseWindow { window_id: chat }).unwrap();
        assert_eq!(state.focused_window_id, Some(terminal));

        reduce_desktop(&mut state, DesktopAction::CloseWindow { window_id: terminal }).unwrap();
        assert_eq!(state.focused_window_id, None);
        assert!(state.windows.is_empty());
    }

    #[test]
    fn closing_unfocused_window_keeps_focus() {
        let mut state = DesktopState::default();

        let terminal = open(&mut state, AppId::Terminal);
        let casino = open(&mut state, AppId::Casino);

        let effects =
            reduce_desktop(&mut state, DesktopAction::CloseWindow { window_id: terminal })
                .unwrap();
        assert_eq!(state.focused_window_id, Some(casino));
        assert!(effects.is_empty());
        assert_registry_invariants(&state);
    }

    #[test]
    fn unknown_window_ids_are_ignored() {
        let mut state = DesktopState::default();
        open(&mut state, AppId::Terminal);
        let before = state.clone();

        let close = reduce_desktop(
            &mut state,
            DesktopAction::CloseWindow {
                window_id: WindowId(99),
            },
        )
        .unwrap();
        let focus = reduce_desktop(
            &mut state,
            DesktopAction::FocusWindow {
                window_id: WindowId(99),
            },
        )
        .unwrap();

        assert!(close.is_empty());
        assert!(focus.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn focus_window_raises_above_newer_windows() {
        let mut state = DesktopState::default();
        let terminal = open(&mut state, AppId::Terminal);
        open(&mut state, AppId::Casino);

        reduce_desktop(&mut state, DesktopAction::FocusWindow { window_id: terminal }).unwrap();

        assert_eq!(state.focused_window_id, Some(terminal));
        assert_eq!(state.active_window().map(|w| w.id), Some(terminal));
        assert_eq!(state.window(terminal).unwrap().z_index, state.z_index_counter);
    }

    #[test]
    fn balance_never_goes_negative() {
        let mut state = DesktopState::default();
        for delta in [-30.0, 12.5, -150.0, -5.0, 20.0] {
            reduce_desktop(&mut state, DesktopAction::UpdateBalance { delta }).unwrap();
            assert!(state.casino_balance >= 0.0);
        }
        assert_eq!(state.casino_balance, 20.0);
    }

    #[test]
    fn withdraw_requires_a_prior_play() {
        let mut state = DesktopState::default();

        let err = reduce_desktop(&mut state, DesktopAction::TriggerExplosion).unwrap_err();
        assert_eq!(err, ReducerError::CasinoNotPlayed);
        assert_eq!(state.game_phase, GamePhase::Normal);

        reduce_desktop(&mut state, DesktopAction::MarkCasinoPlayed).unwrap();
        let effects = reduce_desktop(&mut state, DesktopAction::TriggerExplosion).unwrap();
        assert_eq!(state.game_phase, GamePhase::Exploding);
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::SetPageScrollLocked(true),
                RuntimeEffect::PhaseEntered(GamePhase::Exploding),
            ]
        );
    }

    #[test]
    fn game_phase_only_moves_forward() {
        let mut state = DesktopState::default();

        assert_eq!(
            reduce_desktop(&mut state, DesktopAction::ShowDinoGame),
            Err(ReducerError::TakeoverNotStarted)
        );

        reduce_desktop(&mut state, DesktopAction::MarkCasinoPlayed).unwrap();
        reduce_desktop(&mut state, DesktopAction::TriggerExplosion).unwrap();
        reduce_desktop(&mut state, DesktopAction::ShowDinoGame).unwrap();
        assert_eq!(state.game_phase, GamePhase::Dino);

        let effects = reduce_desktop(&mut state, DesktopAction::TriggerExplosion).unwrap();
        assert!(effects.is_empty());
        assert_eq!(state.game_phase, GamePhase::Dino);

        let effects = reduce_desktop(&mut state, DesktopAction::ShowDinoGame).unwrap();
        assert!(effects.is_empty());
        assert_eq!(state.game_phase, GamePhase::Dino);
    }
}
