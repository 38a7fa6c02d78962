//! Side-scrolling runner: one jumping dino, a stream of obstacles, and a score.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Runner physics and spawn tuning.
pub struct RunnerConfig {
    /// Baseline y the dino stands on.
    pub ground_y: f64,
    pub gravity: f64,
    pub jump_velocity: f64,
    pub initial_speed: f64,
    /// Speed added every frame survived.
    pub speed_ramp: f64,
    pub dino_x: f64,
    pub dino_width: f64,
    pub dino_height: f64,
    /// Logical playfield width; obstacles spawn at this x.
    pub width: f64,
    /// Frames between spawns at the initial speed.
    pub base_spawn_interval: f64,
    pub obstacle_min_width: f64,
    pub obstacle_width_range: f64,
    pub obstacle_min_height: f64,
    pub obstacle_height_range: f64,
    /// Frames per score point.
    pub frames_per_point: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            ground_y: 150.0,
            gravity: 0.8,
            jump_velocity: -14.0,
            initial_speed: 6.0,
            speed_ramp: 0.001,
            dino_x: 50.0,
            dino_width: 20.0,
            dino_height: 22.0,
            width: 600.0,
            base_spawn_interval: 80.0,
            obstacle_min_width: 15.0,
            obstacle_width_range: 10.0,
            obstacle_min_height: 20.0,
            obstacle_height_range: 15.0,
            frames_per_point: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunnerPhase {
    #[default]
    Idle,
    Running,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dino {
    pub x: f64,
    /// Top edge; equals `ground_y` while standing.
    pub y: f64,
    pub vy: f64,
    pub width: f64,
    pub height: f64,
    pub is_jumping: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone)]
pub struct DinoRunner {
    config: RunnerConfig,
    phase: RunnerPhase,
    dino: Dino,
    obstacles: Vec<Obstacle>,
    speed: f64,
    frame: u64,
    score: u64,
}

impl Default for DinoRunner {
    fn default() -> Self {
        Self::new(RunnerConfig::default())
    }
}

impl DinoRunner {
    pub fn new(config: RunnerConfig) -> Self {
        let dino = standing_dino(&config);
        let speed = config.initial_speed;
        Self {
            config,
            phase: RunnerPhase::Idle,
            dino,
            obstacles: Vec::new(),
            speed,
            frame: 0,
            score: 0,
        }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    pub fn phase(&self) -> RunnerPhase {
        self.phase
    }

    pub fn dino(&self) -> &Dino {
        &self.dino
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == RunnerPhase::GameOver
    }

    /// Handles the single input (jump key or tap).
    ///
    /// Starts a fresh run from `Idle` or `GameOver`; while running, jumps only when grounded.
    pub fn press(&mut self) {
        match self.phase {
            RunnerPhase::Idle | RunnerPhase::GameOver => self.restart(),
            RunnerPhase::Running => {
                if !self.dino.is_jumping {
                    self.dino.vy = self.config.jump_velocity;
                    self.dino.is_jumping = true;
                }
            }
        }
    }

    fn restart(&mut self) {
        self.dino = standing_dino(&self.config);
        self.obstacles.clear();
        self.speed = self.config.initial_speed;
        self.frame = 0;
        self.score = 0;
        self.phase = RunnerPhase::Running;
    }

    /// Frames between spawns at the current speed.
    pub fn spawn_interval(&self) -> u64 {
        let interval = (self.config.base_spawn_interval / (self.speed / self.config.initial_speed))
            .floor();
        if interval.is_finite() && interval >= 1.0 {
            interval as u64
        } else {
            1
        }
    }

    /// Advances one frame. Does nothing unless running.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.phase != RunnerPhase::Running {
            return;
        }
        self.frame += 1;

        let dino = &mut self.dino;
        dino.vy += self.config.gravity;
        dino.y += dino.vy;
        if dino.y >= self.config.ground_y {
            dino.y = self.config.ground_y;
            dino.vy = 0.0;
            dino.is_jumping = false;
        }

        if self.frame % self.spawn_interval() == 0 {
            let width = self.config.obstacle_min_width
                + rng.gen::<f64>() * self.config.obstacle_width_range;
            let height = self.config.obstacle_min_height
                + rng.gen::<f64>() * self.config.obstacle_height_range;
            self.obstacles.push(Obstacle {
                x: self.config.width,
                width,
                height,
            });
        }

        let speed = self.speed;
        self.obstacles.retain_mut(|obstacle| {
            obstacle.x -= speed;
            obstacle.x > -obstacle.width
        });

        if self
            .obstacles
            .iter()
            .any(|obstacle| collides(&self.dino, obstacle, self.config.ground_y))
        {
            self.phase = RunnerPhase::GameOver;
            return;
        }

        self.speed += self.config.speed_ramp;
        self.score = self.frame / self.config.frames_per_point.max(1);
    }
}

fn standing_dino(config: &RunnerConfig) -> Dino {
    Dino {
        x: config.dino_x,
        y: config.ground_y,
        vy: 0.0,
        width: config.dino_width,
        height: config.dino_height,
        is_jumping: false,
    }
}

/// Axis-aligned overlap between the dino and a ground obstacle.
pub fn collides(dino: &Dino, obstacle: &Obstacle, ground_y: f64) -> bool {
    dino.x < obstacle.x + obstacle.width
        && dino.x + dino.width > obstacle.x
        && dino.y + dino.height > ground_y + dino.height - obstacle.height
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0xD1A0)
    }

    fn running() -> DinoRunner {
        let mut runner = DinoRunner::default();
        runner.press();
        runner
    }

    #[test]
    fn new_runner_is_idle_with_zero_score() {
        let runner = DinoRunner::default();
        assert_eq!(runner.phase(), RunnerPhase::Idle);
        assert_eq!(runner.score(), 0);
        assert_eq!(runner.dino().y, 150.0);
    }

    #[test]
    fn idle_runner_ignores_ticks() {
        let mut runner = DinoRunner::default();
        runner.tick(&mut rng());
        assert_eq!(runner.frame(), 0);
        assert!(runner.obstacles().is_empty());
    }

    #[test]
    fn press_starts_then_jumps() {
        let mut runner = DinoRunner::default();
        runner.press();
        assert_eq!(runner.phase(), RunnerPhase::Running);
        assert!(!runner.dino().is_jumping);

        runner.press();
        assert!(runner.dino().is_jumping);
        assert_eq!(runner.dino().vy, -14.0);
    }

    #[test]
    fn no_double_jump_while_airborne() {
        let mut runner = running();
        let mut rng = rng();
        runner.press();
        runner.tick(&mut rng);
        let vy_after_first_frame = runner.dino().vy;

        runner.press();

        assert_eq!(runner.dino().vy, vy_after_first_frame);
        assert!(runner.dino().is_jumping);
    }

    #[test]
    fn jump_lands_back_on_the_ground() {
        let mut runner = running();
        let mut rng = rng();
        runner.press();
        for _ in 0..40 {
            runner.tick(&mut rng);
            if !runner.dino().is_jumping {
                break;
            }
        }
        assert!(!runner.dino().is_jumping);
        assert_eq!(runner.dino().y, 150.0);
        assert_eq!(runner.dino().vy, 0.0);
    }

    #[test]
    fn spawns_on_the_interval_at_the_right_edge() {
        let mut runner = DinoRunner::new(RunnerConfig {
            speed_ramp: 0.0,
            ..RunnerConfig::default()
        });
        runner.press();
        let mut rng = rng();
        assert_eq!(runner.spawn_interval(), 80);

        for _ in 0..79 {
            runner.tick(&mut rng);
        }
        assert!(runner.obstacles().is_empty());

        runner.tick(&mut rng);
        let spawned = runner.obstacles()[0];
        assert_eq!(spawned.x, 594.0);
        assert!((15.0..25.0).contains(&spawned.width));
        assert!((20.0..35.0).contains(&spawned.height));
    }

    #[test]
    fn ramping_speed_pulls_the_first_spawn_earlier() {
        let mut runner = running();
        let mut rng = rng();
        for _ in 0..77 {
            runner.tick(&mut rng);
        }
        assert!(runner.obstacles().is_empty());
        runner.tick(&mut rng);
        assert_eq!(runner.obstacles().len(), 1);
    }

    #[test]
    fn speed_ramps_and_score_follows_frames() {
        let mut runner = running();
        let mut rng = rng();
        for _ in 0..50 {
            runner.tick(&mut rng);
        }
        assert_eq!(runner.score(), 10);
        assert!((runner.speed() - 6.05).abs() < 1e-9);
    }

    #[test]
    fn spawn_interval_shrinks_as_speed_grows() {
        let mut runner = running();
        runner.speed = 12.0;
        assert_eq!(runner.spawn_interval(), 40);
        runner.speed = 1000.0;
        assert_eq!(runner.spawn_interval(), 1);
    }

    #[test]
    fn obstacles_leave_once_fully_off_screen() {
        let mut runner = running();
        runner.obstacles.push(Obstacle {
            x: -14.0,
            width: 20.0,
            height: 20.0,
        });
        runner.tick(&mut rng());
        assert!(runner.obstacles().is_empty());
    }

    #[test]
    fn collision_ends_the_run_and_freezes_the_score() {
        let mut runner = running();
        let mut rng = rng();
        for _ in 0..20 {
            runner.tick(&mut rng);
        }
        let score_before = runner.score();
        runner.obstacles.push(Obstacle {
            x: runner.dino().x + 6.0,
            width: 20.0,
            height: 30.0,
        });

        runner.tick(&mut rng);

        assert!(runner.is_game_over());
        assert_eq!(runner.score(), score_before);

        let frame = runner.frame();
        runner.tick(&mut rng);
        assert_eq!(runner.frame(), frame);
        assert_eq!(runner.score(), score_before);
    }

    #[test]
    fn high_jump_clears_a_low_obstacle() {
        let dino = Dino {
            x: 50.0,
            y: 100.0,
            vy: 0.0,
            width: 20.0,
            height: 22.0,
            is_jumping: true,
        };
        let low = Obstacle {
            x: 55.0,
            width: 15.0,
            height: 20.0,
        };
        assert!(!collides(&dino, &low, 150.0));
        let grounded = Dino { y: 150.0, ..dino };
        assert!(collides(&grounded, &low, 150.0));
    }

    #[test]
    fn press_after_game_over_restarts_fresh() {
        let mut runner = running();
        runner.phase = RunnerPhase::GameOver;
        runner.frame = 300;
        runner.score = 60;
        runner.speed = 6.3;
        runner.obstacles.push(Obstacle {
            x: 10.0,
            width: 15.0,
            height: 20.0,
        });

        runner.press();

        assert_eq!(runner.phase(), RunnerPhase::Running);
        assert_eq!(runner.score(), 0);
        assert_eq!(runner.frame(), 0);
        assert_eq!(runner.speed(), 6.0);
        assert!(runner.obstacles().is_empty());
    }
}
