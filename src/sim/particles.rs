//! Particle effects: explosion bursts and ambient background fireworks
//!
//! Particles are purely visual. Explosions and the ambient timer share one
//! pool, so a saturated pool silently starves whichever spawns later.

use glam::Vec2;
use rand::Rng;

use super::pool::Pool;
use super::state::{Particle, Rgb};
use crate::consts::*;
use crate::heading;

/// Particle colors
pub mod palette {
    use super::Rgb;

    /// Enemy destroyed by a laser
    pub const EXPLOSION: Rgb = [1.0, 0.55, 0.1];
    /// Player ship destroyed
    pub const SHIP_DEBRIS: Rgb = [0.3, 0.8, 1.0];
    /// Background fireworks
    pub const AMBIENT: Rgb = [1.0, 1.0, 1.0];
}

/// Uniform random point within [0, w] x [0, h]
pub fn random_point<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2) -> Vec2 {
    Vec2::new(rng.random::<f32>() * bounds.x, rng.random::<f32>() * bounds.y)
}

/// Spawn a single particle with a random direction and speed.
///
/// The slot search starts at a random index and only considers dead slots;
/// when every slot is alive the particle is dropped.
/// Returns whether a particle was placed.
pub fn spawn_one<R: Rng + ?Sized>(
    pool: &mut Pool<Particle>,
    rng: &mut R,
    origin: Vec2,
    color: Rgb,
) -> bool {
    let cap = pool.capacity();
    if cap == 0 {
        return false;
    }
    let start = rng.random_range(0..cap);
    let Some(index) = pool.allocate_from(start) else {
        log::trace!("particle pool exhausted, dropping spawn");
        return false;
    };

    let angle = rng.random_range(0.0..360.0f32);
    let speed = rng.random_range(PARTICLE_MIN_SPEED..=PARTICLE_MAX_SPEED);
    pool.insert_at(
        index,
        Particle {
            pos: origin,
            vel: heading(angle) * speed,
            color,
            alpha: 1.0,
            life: 1.0,
        },
    );
    true
}

/// Spawn `count` particles at `origin`. Returns how many were placed.
pub fn burst<R: Rng + ?Sized>(
    pool: &mut Pool<Particle>,
    rng: &mut R,
    origin: Vec2,
    count: usize,
    color: Rgb,
) -> usize {
    (0..count)
        .filter(|_| spawn_one(pool, rng, origin, color))
        .count()
}

/// Spawn one white particle at a random point in the arena
pub fn ambient<R: Rng + ?Sized>(pool: &mut Pool<Particle>, rng: &mut R, bounds: Vec2) -> bool {
    let origin = random_point(rng, bounds);
    spawn_one(pool, rng, origin, palette::AMBIENT)
}

/// Advance every live particle by one tick
pub fn tick(pool: &mut Pool<Particle>) {
    pool.for_each_active_mut(|_, p| {
        p.pos += p.vel;
        p.alpha = (p.alpha - PARTICLE_DECAY).max(0.0);
        p.life -= PARTICLE_DECAY;
    });
}
