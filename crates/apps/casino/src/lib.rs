//! Lucky Plinko Casino desktop app.
//!
//! The board physics live in [`plinko`]; this module owns the betting controls and drives the
//! board from a [`FrameLoop`]. All money moves through the shared [`LedgerService`] so the
//! runtime stays the single owner of the balance.

pub mod plinko;

use desktop_app_contract::{AppMountContext, AppServices, LedgerService};
use leptos::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use system_ui::{CanvasSurface, FrameControl, FrameLoop, SurfaceError};

use crate::plinko::{Landing, PlinkoBoard, PlinkoConfig, MULTIPLIERS, MULTIPLIER_COLORS};

/// Selectable bet sizes.
pub const BET_PRESETS: [f64; 4] = [5.0, 10.0, 25.0, 50.0];
pub const DEFAULT_BET: f64 = 10.0;

/// Whether a bet of `bet` may be placed against `balance`.
pub fn can_place_bet(bet: f64, balance: f64) -> bool {
    bet > 0.0 && bet <= balance
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Result of pressing Drop.
pub enum DropOutcome {
    /// The bet exceeds the balance; nothing moves.
    Rejected,
    /// The board has no size yet; nothing is charged.
    BoardNotReady,
    /// A ball is in flight and `bet` is owed to the house.
    Dropped { ball_id: u64, bet: f64 },
}

/// Places a bet on `board`. The caller debits the ledger only for [`DropOutcome::Dropped`].
pub fn place_drop<R: Rng + ?Sized>(
    board: &mut PlinkoBoard,
    bet: f64,
    balance: f64,
    rng: &mut R,
) -> DropOutcome {
    if !can_place_bet(bet, balance) {
        return DropOutcome::Rejected;
    }
    match board.drop_ball(bet, rng) {
        Some(ball_id) => DropOutcome::Dropped { ball_id, bet },
        None => DropOutcome::BoardNotReady,
    }
}

/// Formats a balance for display with two decimals.
pub fn format_balance(balance: f64) -> String {
    format!("${balance:.2}")
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct LastResult {
    multiplier: f64,
    won: bool,
}

impl From<Landing> for LastResult {
    fn from(landing: Landing) -> Self {
        Self {
            multiplier: landing.multiplier,
            won: landing.is_win(),
        }
    }
}

struct PlinkoSession {
    board: PlinkoBoard,
    rng: SmallRng,
}

impl PlinkoSession {
    fn new() -> Self {
        Self {
            board: PlinkoBoard::new(PlinkoConfig::default()),
            rng: SmallRng::seed_from_u64(entropy_seed()),
        }
    }
}

fn entropy_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

/// Mounts the casino into a runtime window.
pub fn mount(context: AppMountContext) -> View {
    view! { <CasinoApp services=context.services /> }.into_view()
}

#[component]
pub fn CasinoApp(services: AppServices) -> impl IntoView {
    let ledger = services.ledger;
    let bet = create_rw_signal(DEFAULT_BET);
    let last_result = create_rw_signal(None::<LastResult>);
    let session = store_value(PlinkoSession::new());

    let on_landing = Callback::new(move |landing: Landing| {
        ledger.update_balance(landing.payout());
        last_result.set(Some(landing.into()));
    });

    let drop_ball = move |_| {
        let amount = bet.get_untracked();
        let balance = ledger.balance_untracked();
        let outcome = session.try_update_value(|session| {
            place_drop(&mut session.board, amount, balance, &mut session.rng)
        });
        match outcome {
            Some(DropOutcome::Dropped { bet, .. }) => {
                ledger.update_balance(-bet);
                ledger.mark_played();
            }
            Some(DropOutcome::BoardNotReady) => {
                logging::warn!("plinko board is not sized yet; drop ignored");
            }
            Some(DropOutcome::Rejected) | None => {}
        }
    };

    view! {
        <div class="casino-app">
            <header class="casino-header">
                <span class="casino-balance-label">"Balance"</span>
                <span class="casino-balance">{move || format_balance(ledger.balance())}</span>
            </header>

            <PlinkoCanvas session=session on_landing=on_landing />

            <div class="casino-bets" role="group" aria-label="Bet amount">
                {BET_PRESETS
                    .into_iter()
                    .map(|amount| {
                        view! {
                            <button
                                type="button"
                                class="casino-bet"
                                data-selected=move || (bet.get() == amount).to_string()
                                disabled=move || amount > ledger.balance()
                                on:click=move |_| bet.set(amount)
                            >
                                {format!("${amount}")}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="casino-actions">
                <button
                    type="button"
                    class="casino-drop"
                    disabled=move || !can_place_bet(bet.get(), ledger.balance())
                    on:click=drop_ball
                >
                    {move || format!("Drop (${})", bet.get())}
                </button>
                <WithdrawButton ledger=ledger />
            </div>

            {move || {
                last_result
                    .get()
                    .map(|result| {
                        let (icon, class) = if result.won {
                            ("🎉", "casino-result win")
                        } else {
                            ("😢", "casino-result loss")
                        };
                        view! { <p class=class>{format!("{icon} {}x", result.multiplier)}</p> }
                    })
            }}
        </div>
    }
}

#[component]
fn WithdrawButton(ledger: LedgerService) -> impl IntoView {
    view! {
        <button
            type="button"
            class="casino-withdraw"
            disabled=move || !ledger.has_played()
            title=move || {
                if ledger.has_played() { "Cash out" } else { "Play at least once to withdraw" }
            }
            on:click=move |_| ledger.withdraw()
        >
            "Withdraw"
        </button>
    }
}

#[component]
fn PlinkoCanvas(
    session: StoredValue<PlinkoSession>,
    on_landing: Callback<Landing>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let element: &web_sys::HtmlCanvasElement = &canvas;
        let surface = match CanvasSurface::new(element.clone()) {
            Ok(surface) => surface,
            Err(err) => {
                logging::warn!("plinko canvas unavailable: {err}");
                return;
            }
        };

        let (width, height) = surface.fit_to_layout();
        session.update_value(|session| session.board.resize(width, height));

        let resize_surface = surface.clone();
        let resize_listener = window_event_listener(ev::resize, move |_| {
            let (width, height) = resize_surface.fit_to_layout();
            session.update_value(|session| session.board.resize(width, height));
        });

        let frame_loop = FrameLoop::start(move || {
            let Some(landings) =
                session.try_update_value(|session| session.board.step(&mut session.rng))
            else {
                return FrameControl::Stop;
            };
            for landing in landings {
                on_landing.call(landing);
            }
            session.with_value(|session| {
                if let Err(err) = draw_board(&surface, &session.board) {
                    logging::warn!("plinko draw failed: {err}");
                }
            });
            FrameControl::Continue
        });

        on_cleanup(move || {
            frame_loop.stop();
            resize_listener.remove();
        });
    });

    view! { <canvas class="plinko-canvas" node_ref=canvas_ref aria-label="Plinko board"></canvas> }
}

fn draw_board(surface: &CanvasSurface, board: &PlinkoBoard) -> Result<(), SurfaceError> {
    let width = board.width();
    let height = board.height();
    surface.clear();
    surface.fill_rect("#0f172a", 0.0, 0.0, width, height);

    let slot_top = board.slot_row_top();
    let slot_width = width / MULTIPLIERS.len() as f64;
    for (index, (multiplier, color)) in MULTIPLIERS.iter().zip(MULTIPLIER_COLORS).enumerate() {
        let x = index as f64 * slot_width;
        surface.fill_rect(
            color,
            x + 1.0,
            slot_top,
            slot_width - 2.0,
            board.config().slot_row_height,
        );
        surface.fill_text(
            &format!("{multiplier}x"),
            x + slot_width / 2.0,
            slot_top + 14.0,
            "#ffffff",
            "bold 9px sans-serif",
            "center",
        )?;
    }

    for peg in board.pegs() {
        surface.fill_circle("#e2e8f0", peg.x, peg.y, peg.radius, None)?;
    }
    for ball in board.balls() {
        surface.fill_circle("#facc15", ball.x, ball.y, ball.radius, Some(("#a16207", 1.0)))?;
    }
    Ok(())
}
