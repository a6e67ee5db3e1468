//! Laser Drift - A 2D arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, particles, game state)
//! - `input`: Keyboard and touch input unified into a single command
//! - `viewport`: Logical-to-physical coordinate mapping
//! - `session`: Per-frame driver for the three presentation variants
//! - `platform`: Presentation layer boundary and the frame loop
//! - `renderer`: Draw list generation

pub mod input;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod ui;
pub mod viewport;

pub use session::Session;
pub use settings::{PresentationMode, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Pool capacities
    pub const LASER_CAPACITY: usize = 100;
    pub const ENEMY_CAPACITY: usize = 10;
    pub const PARTICLE_CAPACITY: usize = 100;

    /// Keyboard rotation step (degrees per tick)
    pub const ROTATION_STEP: f32 = 5.0;
    /// Keyboard thrust step (units per tick, per tick)
    pub const THRUST_STEP: f32 = 0.1;
    /// Ship speed ceiling (units per tick)
    pub const SHIP_MAX_SPEED: f32 = 5.0;
    /// Distance from ship center to the nose, where lasers spawn
    pub const SHIP_NOSE_OFFSET: f32 = 20.0;

    /// Laser speed (units per tick)
    pub const LASER_SPEED: f32 = 10.0;
    /// Enemy homing speed (units per tick)
    pub const ENEMY_SPEED: f32 = 2.0;

    /// Hit circle radii
    pub const SHIP_RADIUS: f32 = 20.0;
    pub const ENEMY_RADIUS: f32 = 20.0;
    pub const LASER_RADIUS: f32 = 2.0;

    /// Simulated seconds between enemy spawns
    pub const ENEMY_SPAWN_PERIOD: f32 = 2.0;
    /// Simulated seconds between ambient particles
    pub const AMBIENT_PERIOD: f32 = 0.1;

    /// Particle life/alpha lost per tick
    pub const PARTICLE_DECAY: f32 = 0.01;
    /// Burst particle speed range (units per tick)
    pub const PARTICLE_MIN_SPEED: f32 = 1.0;
    pub const PARTICLE_MAX_SPEED: f32 = 5.0;
    /// Particles spawned when a laser kills an enemy
    pub const EXPLOSION_PARTICLES: usize = 10;
    /// Particles spawned when the ship is destroyed
    pub const DEATH_PARTICLES: usize = 20;

    /// Joystick radius as a fraction of the shorter screen side
    pub const JOYSTICK_RADIUS_FRACTION: f32 = 0.1;
    /// Deflection (fraction of radius) below which rotation is left alone
    pub const JOYSTICK_DEAD_ZONE: f32 = 0.2;
    /// Joystick speed easing per tick
    pub const JOYSTICK_SPEED_EASE: f32 = 0.05;
    /// Speed lost per tick when the joystick is released
    pub const TOUCH_FRICTION: f32 = 0.03;
    /// Default speed at full joystick deflection
    pub const MAX_TOUCH_SPEED: f32 = 5.0;
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round tiny negatives up to exactly 360
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Signed shortest rotation (degrees) that takes `from` to `to`, in (-180, 180]
#[inline]
pub fn shortest_angle_delta(from: f32, to: f32) -> f32 {
    let delta = normalize_degrees(to - from);
    if delta > 180.0 { delta - 360.0 } else { delta }
}

/// Unit vector pointing along a heading given in degrees
#[inline]
pub fn heading(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}
