//! Game state and core simulation types
//!
//! `GameState` is the explicit simulation context: it owns the ship, every
//! entity pool, the timers, the arena bounds and the seeded RNG. Nothing
//! outside it holds simulation state between ticks.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::pool::{Pool, Slot};
use crate::consts::*;
use crate::heading;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Ship destroyed, waiting for retry
    GameOver,
}

/// Linear RGB color, alpha tracked separately
pub type Rgb = [f32; 3];

/// The player's ship
#[derive(Debug, Clone, PartialEq)]
pub struct Spaceship {
    pub pos: Vec2,
    /// Heading in degrees, always in [0, 360)
    pub rotation: f32,
    /// Scalar speed in units per tick, always in [0, SHIP_MAX_SPEED]
    pub speed: f32,
}

impl Spaceship {
    /// A stationary ship facing right at `pos`
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            rotation: 0.0,
            speed: 0.0,
        }
    }

    /// Point where lasers leave the ship
    pub fn nose(&self) -> Vec2 {
        self.pos + heading(self.rotation) * SHIP_NOSE_OFFSET
    }

    pub fn velocity(&self) -> Vec2 {
        heading(self.rotation) * self.speed
    }
}

/// A laser bolt
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Laser {
    pub pos: Vec2,
    /// Degrees
    pub rotation: f32,
    pub speed: f32,
    pub active: bool,
}

impl Laser {
    pub fn new(pos: Vec2, rotation: f32) -> Self {
        Self {
            pos,
            rotation,
            speed: LASER_SPEED,
            active: true,
        }
    }

    pub fn velocity(&self) -> Vec2 {
        heading(self.rotation) * self.speed
    }
}

impl Slot for Laser {
    fn is_active(&self) -> bool {
        self.active
    }

    fn deactivate(&mut self) {
        self.active = false;
    }
}

/// A homing enemy
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    pub speed: f32,
    pub active: bool,
}

impl Enemy {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            speed: ENEMY_SPEED,
            active: true,
        }
    }

    /// Step toward `target`; a zero-length direction means no movement
    pub fn home_toward(&mut self, target: Vec2) {
        let dir = (target - self.pos).normalize_or_zero();
        self.pos += dir * self.speed;
    }
}

impl Slot for Enemy {
    fn is_active(&self) -> bool {
        self.active
    }

    fn deactivate(&mut self) {
        self.active = false;
    }
}

/// A decaying visual particle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub color: Rgb,
    /// Mirrors life, never below 0
    pub alpha: f32,
    /// 1 at spawn, slot is free once this reaches 0 or below
    pub life: f32,
}

impl Slot for Particle {
    fn is_active(&self) -> bool {
        self.life > 0.0
    }

    fn deactivate(&mut self) {
        self.life = 0.0;
        self.alpha = 0.0;
    }
}

/// Whether a point lies within [0, w] x [0, h] (edges inclusive)
#[inline]
pub fn in_bounds(p: Vec2, bounds: Vec2) -> bool {
    p.x >= 0.0 && p.x <= bounds.x && p.y >= 0.0 && p.y <= bounds.y
}

/// Simulated-time accumulators
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timers {
    /// Seconds since the last enemy spawn
    pub enemy_spawn: f32,
    /// Seconds since the last ambient particle
    pub ambient: f32,
}

/// Complete game state (deterministic for a given seed and input script)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Injected random source
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Enemies destroyed this run
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Logical arena size; entities live in [0, w] x [0, h]
    pub bounds: Vec2,
    pub ship: Spaceship,
    pub lasers: Pool<Laser>,
    pub enemies: Pool<Enemy>,
    pub particles: Pool<Particle>,
    pub timers: Timers,
}

impl GameState {
    /// Create a new game state with the given seed and arena size
    pub fn new(seed: u64, bounds: Vec2) -> Self {
        Self::with_rng(seed, Pcg32::seed_from_u64(seed), bounds)
    }

    /// Create a game state around an already constructed RNG
    pub fn with_rng(seed: u64, rng: Pcg32, bounds: Vec2) -> Self {
        Self {
            seed,
            rng,
            phase: GamePhase::Playing,
            score: 0,
            time_ticks: 0,
            bounds,
            ship: Spaceship::at(bounds * 0.5),
            lasers: Pool::new(LASER_CAPACITY),
            enemies: Pool::new(ENEMY_CAPACITY),
            particles: Pool::new(PARTICLE_CAPACITY),
            timers: Timers::default(),
        }
    }

    /// Start a fresh run: centered ship, no lasers or enemies, zero score
    pub fn reset_run(&mut self) {
        self.ship = Spaceship::at(self.bounds * 0.5);
        self.lasers.clear();
        self.enemies.clear();
        self.score = 0;
        self.timers.enemy_spawn = 0.0;
        self.phase = GamePhase::Playing;
    }
}
