use desktop_app_dino_runner::DinoGame;
use leptos::leptos_dom::helpers::TimeoutHandle;
use rand::{rngs::SmallRng, SeedableRng};
use system_ui::{CanvasSurface, FrameControl, FrameLoop, FullScreenOverlay, SurfaceError};

use super::*;
use crate::explosion::{BurstFrame, ExplosionConfig, ExplosionSim};

#[component]
/// Full-screen layer for the withdraw takeover. Empty while the desktop is in its normal phase.
pub(super) fn TakeoverLayer() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let phase = create_memo(move |_| runtime.state.with(|desktop| desktop.game_phase));

    move || match phase.get() {
        GamePhase::Normal => View::default(),
        GamePhase::Exploding => view! { <ExplosionOverlay /> }.into_view(),
        GamePhase::Dino => view! {
            <FullScreenOverlay layout_class="takeover-dino">
                <DinoGame />
            </FullScreenOverlay>
        }
        .into_view(),
    }
}

#[component]
fn ExplosionOverlay() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let config = ExplosionConfig::default();
    let processing = create_rw_signal(true);
    let shaking = create_rw_signal(false);
    let timers = store_value(Vec::<TimeoutHandle>::new());

    let shake_duration = config.shake_duration();
    let start_burst = move || {
        processing.set(false);
        shaking.set(true);
        match set_timeout_with_handle(move || shaking.set(false), shake_duration) {
            Ok(handle) => timers.update_value(|timers| timers.push(handle)),
            Err(err) => {
                logging::warn!("takeover shake timer failed: {err:?}");
                shaking.set(false);
            }
        }
    };
    match set_timeout_with_handle(start_burst, config.processing_delay()) {
        Ok(handle) => timers.update_value(|timers| timers.push(handle)),
        Err(err) => {
            logging::warn!("takeover processing timer failed: {err:?}");
            start_burst();
        }
    }
    on_cleanup(move || {
        for handle in timers.try_update_value(std::mem::take).unwrap_or_default() {
            handle.clear();
        }
    });

    let on_finished = Callback::new(move |()| runtime.dispatch_action(DesktopAction::ShowDinoGame));

    view! {
        <FullScreenOverlay layout_class="takeover-explosion" shaking=shaking>
            {move || {
                if processing.get() {
                    view! {
                        <div class="takeover-processing" role="status">
                            <div class="takeover-spinner" aria-hidden="true"></div>
                            <p>"Processing withdrawal..."</p>
                            <p class="takeover-hint">"Please wait"</p>
                        </div>
                    }
                        .into_view()
                } else {
                    view! { <ExplosionCanvas config=config.clone() on_finished=on_finished /> }
                        .into_view()
                }
            }}
        </FullScreenOverlay>
    }
}

#[component]
fn ExplosionCanvas(config: ExplosionConfig, on_finished: Callback<()>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let element: &web_sys::HtmlCanvasElement = &canvas;
        let surface = match CanvasSurface::new(element.clone()) {
            Ok(surface) => surface,
            Err(err) => {
                logging::warn!("explosion canvas unavailable, skipping burst: {err}");
                on_finished.call(());
                return;
            }
        };

        let (width, height) = surface.fit_to_viewport();
        let mut rng = SmallRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64);
        let mut sim = ExplosionSim::new(config.clone(), width / 2.0, height / 2.0, &mut rng);

        let frame_loop = FrameLoop::start(move || {
            let frame = sim.step();
            if let Err(err) = draw_burst(&surface, &sim, frame) {
                logging::warn!("explosion draw failed: {err}");
            }
            if frame == BurstFrame::Finished {
                on_finished.call(());
                return FrameControl::Stop;
            }
            FrameControl::Continue
        });
        on_cleanup(move || frame_loop.stop());
    });

    view! { <canvas class="takeover-canvas" node_ref=canvas_ref aria-hidden="true"></canvas> }
}

fn draw_burst(
    surface: &CanvasSurface,
    sim: &ExplosionSim,
    frame: BurstFrame,
) -> Result<(), SurfaceError> {
    let (width, height) = (surface.width(), surface.height());
    let trail_alpha = match frame {
        BurstFrame::Burst { trail_alpha } | BurstFrame::Fading { trail_alpha, .. } => trail_alpha,
        BurstFrame::Finished => 1.0,
    };
    surface.set_alpha(1.0);
    surface.fill_rect(&format!("rgba(0, 0, 0, {trail_alpha})"), 0.0, 0.0, width, height);

    let context = surface.context();
    for particle in sim.live_particles() {
        context.save();
        context.translate(particle.x, particle.y)?;
        context.rotate(particle.rotation)?;
        surface.set_alpha(particle.life);
        let half = particle.size / 2.0;
        surface.fill_rect(particle.color, -half, -half, particle.size, particle.size);
        context.restore();
    }

    match frame {
        BurstFrame::Fading { white_alpha, .. } => {
            surface.set_alpha(white_alpha);
            surface.fill_rect("#ffffff", 0.0, 0.0, width, height);
        }
        BurstFrame::Finished => {
            surface.set_alpha(1.0);
            surface.fill_rect("#ffffff", 0.0, 0.0, width, height);
        }
        BurstFrame::Burst { .. } => {}
    }
    surface.set_alpha(1.0);
    Ok(())
}
