use desktop_app_casino::plinko::{Landing, PlinkoBoard, PlinkoConfig};
use desktop_app_contract::AppCommand;
use desktop_runtime::{
    action_for_command, reduce_desktop, AppId, DesktopAction, DesktopState, GamePhase,
    ReducerError, RuntimeEffect, WindowId,
};
use rand::{rngs::SmallRng, SeedableRng};

fn send(state: &mut DesktopState, window_id: WindowId, command: AppCommand) -> Vec<RuntimeEffect> {
    reduce_desktop(state, action_for_command(window_id, command)).expect("command accepted")
}

fn open(state: &mut DesktopState, app_id: AppId) {
    reduce_desktop(state, DesktopAction::OpenApp { app_id }).expect("open app");
}

/// Plays single balls on a fresh board until one lands in a slot paying `multiplier`.
fn first_landing_paying(multiplier: f64, bet: f64) -> Landing {
    for seed in 0..2_000 {
        let mut board = PlinkoBoard::with_size(PlinkoConfig::default(), 300.0, 400.0);
        let mut rng = SmallRng::seed_from_u64(seed);
        board.drop_ball(bet, &mut rng).expect("sized board accepts drops");
        for _ in 0..10_000 {
            if let Some(landing) = board.step(&mut rng).pop() {
                if landing.multiplier == multiplier {
                    return landing;
                }
                break;
            }
        }
    }
    panic!("no seed produced a {multiplier}x landing");
}

#[test]
fn winning_drop_then_withdraw_starts_the_takeover() {
    let mut state = DesktopState::default();
    assert_eq!(state.casino_balance, 100.0);

    open(&mut state, AppId::Casino);
    let casino = state.focused_window_id.expect("casino focused");

    assert_eq!(
        reduce_desktop(&mut state, DesktopAction::TriggerExplosion),
        Err(ReducerError::CasinoNotPlayed)
    );

    send(&mut state, casino, AppCommand::UpdateBalance { delta: -10.0 });
    send(&mut state, casino, AppCommand::MarkCasinoPlayed);
    assert_eq!(state.casino_balance, 90.0);
    assert!(state.has_played_casino);

    let landing = first_landing_paying(2.0, 10.0);
    send(&mut state, casino, AppCommand::UpdateBalance { delta: landing.payout() });
    assert_eq!(state.casino_balance, 110.0);

    let effects = send(&mut state, casino, AppCommand::TriggerExplosion);
    assert_eq!(state.game_phase, GamePhase::Exploding);
    assert_eq!(
        effects,
        vec![
            RuntimeEffect::SetPageScrollLocked(true),
            RuntimeEffect::PhaseEntered(GamePhase::Exploding),
        ]
    );

    reduce_desktop(&mut state, DesktopAction::ShowDinoGame).expect("runner after burst");
    assert_eq!(state.game_phase, GamePhase::Dino);

    let effects = send(&mut state, casino, AppCommand::TriggerExplosion);
    assert!(effects.is_empty());
    assert_eq!(state.game_phase, GamePhase::Dino);
}

#[test]
fn losing_streak_never_drives_the_balance_negative() {
    let mut state = DesktopState::default();
    open(&mut state, AppId::Casino);
    let casino = state.focused_window_id.expect("casino focused");

    send(&mut state, casino, AppCommand::UpdateBalance { delta: -150.0 });
    assert_eq!(state.casino_balance, 0.0);
}

#[test]
fn close_command_from_an_app_closes_its_own_window() {
    let mut state = DesktopState::default();
    open(&mut state, AppId::Terminal);
    open(&mut state, AppId::Casino);
    let casino = state.focused_window_id.expect("casino focused");

    send(&mut state, casino, AppCommand::CloseWindow);

    assert!(state.window_for_app(AppId::Casino).is_none());
    assert_eq!(
        state.focused_window_id,
        state.window_for_app(AppId::Terminal).map(|window| window.id)
    );
}
