//! Shared window-registry transition helpers used by the desktop reducer.

use crate::model::{AppId, DesktopState, WindowId, WindowRecord};

/// Allocates the next unique window id.
pub fn next_window_id(state: &mut DesktopState) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);
    id
}

fn bump_z_index(state: &mut DesktopState) -> u32 {
    state.z_index_counter = state.z_index_counter.saturating_add(1);
    state.z_index_counter
}

/// Raises `window_id` above every other window and focuses it.
///
/// Returns `false` (leaving the counter untouched) when the window does not exist.
pub fn raise_window(state: &mut DesktopState, window_id: WindowId) -> bool {
    if state.window(window_id).is_none() {
        return false;
    }
    let z_index = bump_z_index(state);
    if let Some(window) = state.windows.iter_mut().find(|w| w.id == window_id) {
        window.z_index = z_index;
    }
    state.focused_window_id = Some(window_id);
    true
}

/// Focuses the existing window for `app_id`, or creates one. Returns the focused window id.
pub fn open_or_raise(state: &mut DesktopState, app_id: AppId) -> WindowId {
    if let Some(existing) = state.window_for_app(app_id).map(|w| w.id) {
        raise_window(state, existing);
        return existing;
    }

    let window_id = next_window_id(state);
    let z_index = bump_z_index(state);
    state.windows.push(WindowRecord {
        id: window_id,
        app_id,
        z_index,
    });
    state.focused_window_id = Some(window_id);
    window_id
}

/// Removes `window_id`, handing focus to the most recently opened survivor when it was focused.
///
/// Returns `false` when no such window exists.
pub fn close_window(state: &mut DesktopState, window_id: WindowId) -> bool {
    let before_len = state.windows.len();
    state.windows.retain(|w| w.id != window_id);
    if state.windows.len() == before_len {
        return false;
    }
    if state.focused_window_id == Some(window_id) {
        state.focused_window_id = state.windows.last().map(|w| w.id);
    }
    true
}
