//! Particle burst played when the player withdraws, ending in a white-out.

use std::{f64::consts::TAU, time::Duration};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Particle palette.
pub const PARTICLE_COLORS: [&str; 6] = [
    "#ff6b35", "#f7c59f", "#ff4500", "#ffd700", "#ffffff", "#ff1744",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplosionConfig {
    pub particle_count: usize,
    pub min_speed: f64,
    pub speed_range: f64,
    pub min_size: f64,
    pub size_range: f64,
    pub gravity: f64,
    /// Horizontal velocity multiplier applied every frame.
    pub drag: f64,
    pub life_decay: f64,
    pub rotation_speed_range: f64,
    /// Frames of pure burst before the white fade starts.
    pub burst_frames: u32,
    pub fade_frames: u32,
    /// Frames that use the lighter trail alpha.
    pub early_trail_frames: u32,
    pub early_trail_alpha: f64,
    pub late_trail_alpha: f64,
    /// "Processing withdrawal..." screen duration, in milliseconds.
    pub processing_ms: u64,
    /// Screen shake duration once the burst starts, in milliseconds.
    pub shake_ms: u64,
}

impl Default for ExplosionConfig {
    fn default() -> Self {
        Self {
            particle_count: 250,
            min_speed: 5.0,
            speed_range: 15.0,
            min_size: 3.0,
            size_range: 8.0,
            gravity: 0.2,
            drag: 0.99,
            life_decay: 0.008,
            rotation_speed_range: 0.3,
            burst_frames: 180,
            fade_frames: 30,
            early_trail_frames: 60,
            early_trail_alpha: 0.1,
            late_trail_alpha: 0.15,
            processing_ms: 1500,
            shake_ms: 500,
        }
    }
}

impl ExplosionConfig {
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_ms)
    }

    pub fn shake_duration(&self) -> Duration {
        Duration::from_millis(self.shake_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub color: &'static str,
    pub life: f64,
    pub rotation: f64,
    pub rotation_speed: f64,
}

impl Particle {
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// What the renderer should paint after a [`ExplosionSim::step`].
pub enum BurstFrame {
    /// Particles only, over a translucent black trail.
    Burst { trail_alpha: f64 },
    /// Particles plus a white layer at `white_alpha`.
    Fading { trail_alpha: f64, white_alpha: f64 },
    /// Fully white. The takeover should move on to the runner.
    Finished,
}

#[derive(Debug, Clone)]
pub struct ExplosionSim {
    config: ExplosionConfig,
    particles: Vec<Particle>,
    frame: u32,
}

impl ExplosionSim {
    /// Spawns the particle burst at `(center_x, center_y)`.
    pub fn new<R: Rng + ?Sized>(
        config: ExplosionConfig,
        center_x: f64,
        center_y: f64,
        rng: &mut R,
    ) -> Self {
        let particles = (0..config.particle_count)
            .map(|_| {
                let angle = rng.gen::<f64>() * TAU;
                let speed = config.min_speed + rng.gen::<f64>() * config.speed_range;
                let (sin, cos) = angle.sin_cos();
                Particle {
                    x: center_x,
                    y: center_y,
                    vx: cos * speed,
                    vy: sin * speed,
                    size: config.min_size + rng.gen::<f64>() * config.size_range,
                    color: PARTICLE_COLORS[rng.gen_range(0..PARTICLE_COLORS.len())],
                    life: 1.0,
                    rotation: rng.gen::<f64>() * TAU,
                    rotation_speed: (rng.gen::<f64>() - 0.5) * config.rotation_speed_range,
                }
            })
            .collect();
        Self {
            config,
            particles,
            frame: 0,
        }
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn live_particles(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(|particle| particle.is_alive())
    }

    /// Advances the burst by one frame.
    pub fn step(&mut self) -> BurstFrame {
        self.frame += 1;
        let config = &self.config;
        for particle in &mut self.particles {
            particle.x += particle.vx;
            particle.y += particle.vy;
            particle.vy += config.gravity;
            particle.vx *= config.drag;
            particle.life -= config.life_decay;
            particle.rotation += particle.rotation_speed;
        }

        let trail_alpha = if self.frame < config.early_trail_frames {
            config.early_trail_alpha
        } else {
            config.late_trail_alpha
        };
        if self.frame < config.burst_frames {
            return BurstFrame::Burst { trail_alpha };
        }
        let faded = self.frame - config.burst_frames;
        if faded >= config.fade_frames {
            return BurstFrame::Finished;
        }
        BurstFrame::Fading {
            trail_alpha,
            white_alpha: f64::from(faded) / f64::from(config.fade_frames.max(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;

    fn sim() -> ExplosionSim {
        ExplosionSim::new(ExplosionConfig::default(), 400.0, 300.0, &mut SmallRng::seed_from_u64(9))
    }

    #[test]
    fn spawns_the_configured_particles_at_the_centre() {
        let sim = sim();
        assert_eq!(sim.particles().len(), 250);
        for particle in sim.particles() {
            assert_eq!((particle.x, particle.y), (400.0, 300.0));
            let speed = particle.vx.hypot(particle.vy);
            assert!((5.0..=20.0).contains(&speed), "speed {speed}");
            assert!((3.0..11.0).contains(&particle.size));
            assert!(PARTICLE_COLORS.contains(&particle.color));
            assert!(particle.rotation_speed.abs() <= 0.15);
        }
    }

    #[test]
    fn step_integrates_then_applies_gravity_and_drag() {
        let mut sim = sim();
        let before = sim.particles()[0];
        sim.step();
        let after = sim.particles()[0];

        assert_eq!(after.x, before.x + before.vx);
        assert_eq!(after.y, before.y + before.vy);
        assert_eq!(after.vy, before.vy + 0.2);
        assert_eq!(after.vx, before.vx * 0.99);
        assert!((after.life - 0.992).abs() < 1e-12);
    }

    #[test]
    fn trail_alpha_thickens_after_the_first_second() {
        let mut sim = sim();
        assert_eq!(sim.step(), BurstFrame::Burst { trail_alpha: 0.1 });
        for _ in 1..59 {
            sim.step();
        }
        assert_eq!(sim.frame(), 59);
        assert_eq!(sim.step(), BurstFrame::Burst { trail_alpha: 0.15 });
    }

    #[test]
    fn fades_to_white_then_finishes() {
        let mut sim = sim();
        for _ in 0..179 {
            assert!(matches!(sim.step(), BurstFrame::Burst { .. }));
        }
        assert_eq!(
            sim.step(),
            BurstFrame::Fading {
                trail_alpha: 0.15,
                white_alpha: 0.0
            }
        );
        for _ in 0..29 {
            assert!(matches!(sim.step(), BurstFrame::Fading { .. }));
        }
        assert_eq!(sim.frame(), 209);
        assert_eq!(sim.step(), BurstFrame::Finished);
    }

    #[test]
    fn particles_die_after_their_life_runs_out() {
        let mut sim = sim();
        for _ in 0..126 {
            sim.step();
        }
        assert_eq!(sim.live_particles().count(), 0);
    }
}
