//! Casino balance and takeover-phase transitions.

use crate::model::{DesktopState, GamePhase};

/// Applies a signed delta to the casino balance, clamping at zero.
///
/// Non-finite deltas are ignored so a bad payout can never poison the balance.
pub fn apply_balance_delta(state: &mut DesktopState, delta: f64) -> bool {
    if !delta.is_finite() {
        return false;
    }
    let next = (state.casino_balance + delta).max(0.0);
    if next == state.casino_balance {
        return false;
    }
    state.casino_balance = next;
    true
}

/// Sets the "has played" flag. Returns `true` only on the first call.
pub fn mark_played(state: &mut DesktopState) -> bool {
    let changed = !state.has_played_casino;
    state.has_played_casino = true;
    changed
}

/// Moves the takeover phase forward to `next`. Backward or repeated moves leave state untouched.
pub fn advance_phase(state: &mut DesktopState, next: GamePhase) -> bool {
    if !state.game_phase.can_advance_to(next) {
        return false;
    }
    state.game_phase = next;
    true
}
