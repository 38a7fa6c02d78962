//! Plinko board physics: a static triangular peg field, falling balls, and slot scoring.
//!
//! The board is stepped once per display frame. Randomness only enters through the `rng`
//! argument of [`PlinkoBoard::drop_ball`] and [`PlinkoBoard::step`], so a seeded generator
//! reproduces a run exactly.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Payout multipliers for the scoring slots, left to right.
pub const MULTIPLIERS: [f64; 11] = [0.2, 0.5, 0.5, 1.0, 2.0, 5.0, 2.0, 1.0, 0.5, 0.5, 0.2];

/// Slot highlight colours, parallel to [`MULTIPLIERS`].
pub const MULTIPLIER_COLORS: [&str; 11] = [
    "#ef4444", "#f97316", "#f97316", "#eab308", "#22c55e", "#10b981", "#22c55e", "#eab308",
    "#f97316", "#f97316", "#ef4444",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Physics and layout tuning for a board.
pub struct PlinkoConfig {
    pub gravity: f64,
    /// Fraction of speed kept after a bounce.
    pub restitution: f64,
    /// Width of the uniform horizontal kick added on every peg hit.
    pub bounce_jitter: f64,
    pub peg_rows: usize,
    /// Pegs in the first row; each following row adds one.
    pub first_row_pegs: usize,
    pub peg_spacing: f64,
    pub peg_radius: f64,
    pub first_row_y: f64,
    /// Vertical space excluded from the peg field (top offset plus slot row).
    pub vertical_margin: f64,
    pub ball_radius: f64,
    pub drop_y: f64,
    /// Width of the uniform spread around the centre for unaimed drops.
    pub drop_spread: f64,
    pub slot_row_height: f64,
}

impl Default for PlinkoConfig {
    fn default() -> Self {
        Self {
            gravity: 0.25,
            restitution: 0.7,
            bounce_jitter: 1.5,
            peg_rows: 8,
            first_row_pegs: 3,
            peg_spacing: 25.0,
            peg_radius: 3.0,
            first_row_y: 30.0,
            vertical_margin: 60.0,
            ball_radius: 5.0,
            drop_y: 8.0,
            drop_spread: 20.0,
            slot_row_height: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Peg {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub bet_amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// A ball that reached the scoring row.
pub struct Landing {
    pub ball_id: u64,
    pub slot_index: usize,
    pub multiplier: f64,
    pub bet_amount: f64,
}

impl Landing {
    /// Amount credited back for this ball.
    pub fn payout(&self) -> f64 {
        self.bet_amount * self.multiplier
    }

    pub fn is_win(&self) -> bool {
        self.multiplier >= 1.0
    }
}

/// Lays out the triangular peg field for a board of the given size.
pub fn layout_pegs(config: &PlinkoConfig, width: f64, height: f64) -> Vec<Peg> {
    let row_height = (height - config.vertical_margin) / config.peg_rows as f64;
    let mut pegs = Vec::new();
    for row in 0..config.peg_rows {
        let pegs_in_row = row + config.first_row_pegs;
        let row_width = (pegs_in_row - 1) as f64 * config.peg_spacing;
        let start_x = (width - row_width) / 2.0;
        for col in 0..pegs_in_row {
            pegs.push(Peg {
                x: start_x + col as f64 * config.peg_spacing,
                y: config.first_row_y + row as f64 * row_height,
                radius: config.peg_radius,
            });
        }
    }
    pegs
}

/// Maps a horizontal position to a slot index, clamping positions outside the board to the edges.
pub fn slot_index(x: f64, width: f64) -> usize {
    if width <= 0.0 || !x.is_finite() {
        return 0;
    }
    let slot_width = width / MULTIPLIERS.len() as f64;
    let raw = (x / slot_width).floor();
    if raw <= 0.0 {
        0
    } else {
        (raw as usize).min(MULTIPLIERS.len() - 1)
    }
}

#[derive(Debug, Clone)]
pub struct PlinkoBoard {
    config: PlinkoConfig,
    width: f64,
    height: f64,
    pegs: Vec<Peg>,
    balls: Vec<Ball>,
    next_ball_id: u64,
}

impl PlinkoBoard {
    /// Creates an unsized board. Drops are ignored until [`PlinkoBoard::resize`] is called.
    pub fn new(config: PlinkoConfig) -> Self {
        Self {
            config,
            width: 0.0,
            height: 0.0,
            pegs: Vec::new(),
            balls: Vec::new(),
            next_ball_id: 1,
        }
    }

    pub fn with_size(config: PlinkoConfig, width: f64, height: f64) -> Self {
        let mut board = Self::new(config);
        board.resize(width, height);
        board
    }

    /// Updates the board dimensions and recomputes the peg field.
    pub fn resize(&mut self, width: f64, height: f64) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.pegs = layout_pegs(&self.config, self.width, self.height);
    }

    pub fn config(&self) -> &PlinkoConfig {
        &self.config
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn pegs(&self) -> &[Peg] {
        &self.pegs
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn has_dimensions(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Top edge of the scoring row.
    pub fn slot_row_top(&self) -> f64 {
        self.height - self.config.slot_row_height
    }

    /// Drops a ball near the centre with a small random offset.
    pub fn drop_ball<R: Rng + ?Sized>(&mut self, bet_amount: f64, rng: &mut R) -> Option<u64> {
        let offset = (rng.gen::<f64>() - 0.5) * self.config.drop_spread;
        self.drop_ball_at(self.width / 2.0 + offset, bet_amount)
    }

    /// Drops a ball at an exact horizontal position with zero velocity.
    pub fn drop_ball_at(&mut self, x: f64, bet_amount: f64) -> Option<u64> {
        if !self.has_dimensions() {
            return None;
        }
        let id = self.next_ball_id;
        self.next_ball_id = self.next_ball_id.saturating_add(1);
        self.balls.push(Ball {
            id,
            x,
            y: self.config.drop_y,
            vx: 0.0,
            vy: 0.0,
            radius: self.config.ball_radius,
            bet_amount,
        });
        Some(id)
    }

    /// Advances every in-flight ball by one frame and returns the balls that landed.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Landing> {
        let mut landings = Vec::new();
        let config = &self.config;
        let pegs = &self.pegs;
        let width = self.width;
        let landing_line = self.height - config.slot_row_height;

        self.balls.retain_mut(|ball| {
            ball.vy += config.gravity;
            ball.x += ball.vx;
            ball.y += ball.vy;

            for peg in pegs {
                bounce_off_peg(ball, peg, config, rng);
            }

            if ball.x < ball.radius {
                ball.x = ball.radius;
                ball.vx = ball.vx.abs() * config.restitution;
            }
            if ball.x > width - ball.radius {
                ball.x = width - ball.radius;
                ball.vx = -ball.vx.abs() * config.restitution;
            }

            if ball.y >= landing_line - ball.radius {
                let slot = slot_index(ball.x, width);
                landings.push(Landing {
                    ball_id: ball.id,
                    slot_index: slot,
                    multiplier: MULTIPLIERS[slot],
                    bet_amount: ball.bet_amount,
                });
                return false;
            }
            true
        });

        landings
    }
}

fn bounce_off_peg<R: Rng + ?Sized>(ball: &mut Ball, peg: &Peg, config: &PlinkoConfig, rng: &mut R) {
    let dx = ball.x - peg.x;
    let dy = ball.y - peg.y;
    let distance = dx.hypot(dy);
    let min_distance = ball.radius + peg.radius;
    if distance >= min_distance {
        return;
    }

    let angle = dy.atan2(dx);
    let speed = ball.vx.hypot(ball.vy);
    let (sin, cos) = angle.sin_cos();
    let kick = (rng.gen::<f64>() - 0.5) * config.bounce_jitter;

    ball.vx = cos * speed * config.restitution + kick;
    ball.vy = sin * speed * config.restitution;
    // Push the ball just outside the peg so it cannot sink in on the next frame.
    ball.x = peg.x + (min_distance + 1.0) * cos;
    ball.y = peg.y + (min_distance + 1.0) * sin;
}
