//! Offline-style runner shown at the end of the withdraw takeover.

pub mod engine;

use leptos::*;
use rand::{rngs::SmallRng, SeedableRng};
use system_ui::{CanvasSurface, FrameControl, FrameLoop, SurfaceError};

use crate::engine::{DinoRunner, RunnerConfig, RunnerPhase};

const CANVAS_WIDTH: u32 = 600;
const CANVAS_HEIGHT: u32 = 200;

/// Live score as shown in the corner: five digits, zero padded.
pub fn score_label(score: u64) -> String {
    format!("{score:05}")
}

/// Keys that start, restart, or jump.
pub fn is_jump_key(code: &str) -> bool {
    matches!(code, "Space" | "ArrowUp")
}

struct RunnerSession {
    runner: DinoRunner,
    rng: SmallRng,
}

#[component]
/// Full-width runner game. Space, ArrowUp, or a click drives [`DinoRunner::press`].
pub fn DinoGame() -> impl IntoView {
    let session = store_value(RunnerSession {
        runner: DinoRunner::new(RunnerConfig::default()),
        rng: SmallRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64),
    });
    let phase = create_rw_signal(RunnerPhase::Idle);
    let score = create_rw_signal(0_u64);
    let canvas_ref = create_node_ref::<html::Canvas>();

    let sync = move || {
        session.with_value(|session| {
            let next_phase = session.runner.phase();
            if phase.get_untracked() != next_phase {
                phase.set(next_phase);
            }
            let next_score = session.runner.score();
            if score.get_untracked() != next_score {
                score.set(next_score);
            }
        });
    };
    let press = move || {
        session.update_value(|session| session.runner.press());
        sync();
    };

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if is_jump_key(&ev.code()) {
            ev.prevent_default();
            press();
        }
    });
    on_cleanup(move || keydown.remove());

    create_effect(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let element: &web_sys::HtmlCanvasElement = &canvas;
        let surface = match CanvasSurface::new(element.clone()) {
            Ok(surface) => surface,
            Err(err) => {
                logging::warn!("runner canvas unavailable: {err}");
                return;
            }
        };

        let frame_loop = FrameLoop::start(move || {
            let Some(drawn) = session.try_update_value(|session| {
                session.runner.tick(&mut session.rng);
                draw_runner(&surface, &session.runner)
            }) else {
                return FrameControl::Stop;
            };
            if let Err(err) = drawn {
                logging::warn!("runner draw failed: {err}");
            }
            sync();
            FrameControl::Continue
        });
        on_cleanup(move || frame_loop.stop());
    });

    view! {
        <div class="dino-game" on:click=move |_| press()>
            <div class="dino-score" aria-live="off">{move || score_label(score.get())}</div>
            <canvas
                class="dino-canvas"
                width=CANVAS_WIDTH
                height=CANVAS_HEIGHT
                node_ref=canvas_ref
                aria-label="Runner game"
            ></canvas>
            {move || match phase.get() {
                RunnerPhase::Idle => {
                    view! {
                        <div class="dino-message">
                            <h2>"No Internet"</h2>
                            <p class="dino-error-code">"ERR_GREED_DETECTED"</p>
                            <p>"Press Space or tap to play"</p>
                        </div>
                    }
                        .into_view()
                }
                RunnerPhase::GameOver => {
                    view! {
                        <div class="dino-message">
                            <h2>"GAME OVER"</h2>
                            <p>{format!("Score: {}", score.get())}</p>
                            <p>"Press Space or tap to restart"</p>
                        </div>
                    }
                        .into_view()
                }
                RunnerPhase::Running => View::default(),
            }}
        </div>
    }
}

fn draw_runner(surface: &CanvasSurface, runner: &DinoRunner) -> Result<(), SurfaceError> {
    let config = runner.config();
    let ground_line = config.ground_y + config.dino_height;
    surface.clear();
    surface.fill_rect("#f7f7f7", 0.0, 0.0, surface.width(), surface.height());
    surface.line("#535353", (0.0, ground_line), (surface.width(), ground_line));

    let dino = runner.dino();
    surface.fill_rect("#535353", dino.x, dino.y, dino.width, dino.height);
    surface.fill_rect("#f7f7f7", dino.x + dino.width - 6.0, dino.y + 4.0, 3.0, 3.0);

    for obstacle in runner.obstacles() {
        surface.fill_rect(
            "#535353",
            obstacle.x,
            ground_line - obstacle.height,
            obstacle.width,
            obstacle.height,
        );
    }

    if runner.is_game_over() {
        surface.fill_text(
            "GAME OVER",
            surface.width() / 2.0,
            60.0,
            "#535353",
            "bold 20px monospace",
            "center",
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn score_is_zero_padded_to_five_digits() {
        assert_eq!(score_label(0), "00000");
        assert_eq!(score_label(42), "00042");
        assert_eq!(score_label(123456), "123456");
    }

    #[test]
    fn only_space_and_arrow_up_drive_the_runner() {
        assert!(is_jump_key("Space"));
        assert!(is_jump_key("ArrowUp"));
        assert!(!is_jump_key("ArrowDown"));
        assert!(!is_jump_key("Enter"));
    }
}
