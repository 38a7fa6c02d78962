//! Terminal desktop app: a typed-out `neofetch` profile card.

pub mod typewriter;

use std::time::Duration;

use desktop_app_contract::AppMountContext;
use leptos::leptos_dom::helpers::{IntervalHandle, TimeoutHandle};
use leptos::*;

use crate::typewriter::Typewriter;

/// Delay between revealed characters.
pub const TYPE_INTERVAL: Duration = Duration::from_millis(8);
/// How long the cursor keeps blinking after the card is complete.
pub const CURSOR_LINGER: Duration = Duration::from_secs(1);

/// 2006-01-25T00:00:00Z in Unix milliseconds.
const BIRTH_DATE_MS: f64 = 1_138_147_200_000.0;
const MS_PER_YEAR: f64 = 1000.0 * 60.0 * 60.0 * 24.0 * 365.0;

/// Whole years elapsed since `birth_ms`, counting 365-day years.
pub fn age_in_years(birth_ms: f64, now_ms: f64) -> u32 {
    let years = ((now_ms - birth_ms) / MS_PER_YEAR).floor();
    if years.is_finite() && years > 0.0 {
        years as u32
    } else {
        0
    }
}

/// The full `neofetch --dev` transcript for the given age.
pub fn neofetch_card(age: u32) -> String {
    format!(
        "$ neofetch --dev
╭───────────────────────────╮
│    ███╗   ███╗████████╗   │
│    ████╗ ████║╚══██╔══╝   │
│    ██╔████╔██║   ██║      │
│    ██║╚██╔╝██║   ██║      │
│    ██║ ╚═╝ ██║   ██║      │
│    ╚═╝     ╚═╝   ╚═╝      │
╰───────────────────────────╯
  Age: {age}
  Location: Odesa, Ukraine
  Languages: Ukrainian (native), English (B2)
  Stack: Node.js · TypeScript · AWS
  Passionate: true"
    )
}

/// Mounts the terminal into a runtime window.
pub fn mount(_context: AppMountContext) -> View {
    view! { <TerminalApp /> }.into_view()
}

#[component]
/// Typewriter-rendered profile card with a trailing block cursor.
pub fn TerminalApp() -> impl IntoView {
    let age = age_in_years(BIRTH_DATE_MS, js_sys::Date::now());
    let typewriter = store_value(Typewriter::new(&neofetch_card(age)));
    let full_text = typewriter.with_value(Typewriter::full_text);
    let revealed = create_rw_signal(0_usize);
    let cursor_visible = create_rw_signal(true);
    let type_timer = store_value(None::<IntervalHandle>);
    let cursor_timer = store_value(None::<TimeoutHandle>);

    let finish_typing = move || {
        if let Some(handle) = type_timer.try_update_value(Option::take).flatten() {
            handle.clear();
        }
        match set_timeout_with_handle(move || cursor_visible.set(false), CURSOR_LINGER) {
            Ok(handle) => cursor_timer.set_value(Some(handle)),
            Err(err) => {
                logging::warn!("terminal cursor timer failed: {err:?}");
                cursor_visible.set(false);
            }
        }
    };

    match set_interval_with_handle(
        move || match typewriter.try_update_value(|typewriter| {
            typewriter.advance().then(|| typewriter.revealed())
        }) {
            Some(Some(count)) => revealed.set(count),
            Some(None) => finish_typing(),
            None => {}
        },
        TYPE_INTERVAL,
    ) {
        Ok(handle) => type_timer.set_value(Some(handle)),
        Err(err) => {
            logging::warn!("terminal typewriter timer failed: {err:?}");
            typewriter.update_value(Typewriter::finish);
            revealed.set(typewriter.with_value(Typewriter::revealed));
            cursor_visible.set(false);
        }
    }

    on_cleanup(move || {
        if let Some(handle) = type_timer.try_update_value(Option::take).flatten() {
            handle.clear();
        }
        if let Some(handle) = cursor_timer.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    });

    view! {
        <div class="terminal-app">
            <pre class="terminal-sizer" aria-hidden="true">{full_text}</pre>
            <pre class="terminal-output">
                {move || {
                    revealed.track();
                    typewriter.with_value(Typewriter::visible)
                }}
                <Show when=move || cursor_visible.get()>
                    <span class="terminal-cursor">"▊"</span>
                </Show>
            </pre>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn age_counts_whole_365_day_years() {
        assert_eq!(age_in_years(BIRTH_DATE_MS, BIRTH_DATE_MS), 0);
        assert_eq!(age_in_years(BIRTH_DATE_MS, BIRTH_DATE_MS + 365.0 * 86_400_000.0 - 1.0), 0);
        assert_eq!(age_in_years(BIRTH_DATE_MS, BIRTH_DATE_MS + 20.0 * MS_PER_YEAR), 20);
        assert_eq!(age_in_years(BIRTH_DATE_MS, 0.0), 0);
    }

    #[test]
    fn card_embeds_the_age_and_profile_lines() {
        let card = neofetch_card(20);
        let lines: Vec<&str> = card.lines().collect();
        assert_eq!(lines[0], "$ neofetch --dev");
        assert_eq!(lines[9], "  Age: 20");
        assert_eq!(lines.last().copied(), Some("  Passionate: true"));
        assert_eq!(lines.len(), 14);
    }
}
