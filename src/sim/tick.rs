//! Fixed-cadence simulation tick
//!
//! Advances the game by one step. Entity speeds are per-tick displacements;
//! `dt` only drives the spawn timers.

use glam::Vec2;

use super::collision::circles_overlap;
use super::particles::{self, palette};
use super::state::{Enemy, GamePhase, GameState, Laser, in_bounds};
use crate::consts::*;
use crate::normalize_degrees;

/// Movement and fire command for a single tick, independent of input device
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Command {
    /// Degrees added to the ship rotation
    pub rotate_delta: f32,
    /// Added to the ship speed
    pub thrust_delta: f32,
    /// Fire edge (true for exactly one tick per press)
    pub fire: bool,
}

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub command: Command,
    /// Confirmed retry (key press or click on the retry button)
    pub retry: bool,
}

/// Wrap a position to the opposite edge on each axis independently
pub fn wrap_position(mut pos: Vec2, bounds: Vec2) -> Vec2 {
    if pos.x < 0.0 {
        pos.x = bounds.x;
    } else if pos.x > bounds.x {
        pos.x = 0.0;
    }
    if pos.y < 0.0 {
        pos.y = bounds.y;
    } else if pos.y > bounds.y {
        pos.y = 0.0;
    }
    pos
}

/// Advance the game state by one tick of `dt` simulated seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;

    // Particles keep animating in every phase
    particles::tick(&mut state.particles);

    match state.phase {
        GamePhase::Playing => step_playing(state, &input.command, dt),
        GamePhase::GameOver => {
            if input.retry {
                state.reset_run();
                log::info!("Retry: new run started at tick {}", state.time_ticks);
            }
        }
    }

    state.timers.ambient += dt;
    if state.timers.ambient >= AMBIENT_PERIOD {
        state.timers.ambient = 0.0;
        particles::ambient(&mut state.particles, &mut state.rng, state.bounds);
    }
}

fn step_playing(state: &mut GameState, command: &Command, dt: f32) {
    let bounds = state.bounds;

    // Ship
    let ship = &mut state.ship;
    ship.rotation = normalize_degrees(ship.rotation + command.rotate_delta);
    ship.speed = (ship.speed + command.thrust_delta).clamp(0.0, SHIP_MAX_SPEED);
    ship.pos = wrap_position(ship.pos + ship.velocity(), bounds);

    if command.fire
        && state
            .lasers
            .spawn(Laser::new(state.ship.nose(), state.ship.rotation))
            .is_none()
    {
        log::trace!("laser pool exhausted, dropping shot");
    }

    // Lasers leave play the tick they cross the edge
    state.lasers.for_each_active_mut(|_, laser| {
        laser.pos += laser.velocity();
        if !in_bounds(laser.pos, bounds) {
            laser.active = false;
        }
    });

    // Enemy spawn
    state.timers.enemy_spawn += dt;
    if state.timers.enemy_spawn >= ENEMY_SPAWN_PERIOD {
        state.timers.enemy_spawn = 0.0;
        if state.enemies.allocate().is_some() {
            let pos = particles::random_point(&mut state.rng, bounds);
            state.enemies.spawn(Enemy::new(pos));
            log::debug!("Enemy spawned at ({:.1}, {:.1})", pos.x, pos.y);
        } else {
            log::trace!("enemy pool exhausted, dropping spawn");
        }
    }

    // Homing
    let target = state.ship.pos;
    state.enemies.for_each_active_mut(|_, enemy| enemy.home_toward(target));

    // Laser vs enemy
    for li in 0..state.lasers.capacity() {
        let Some(laser_pos) = state.lasers.get(li).map(|l| l.pos) else {
            continue;
        };
        let hit = state
            .enemies
            .iter_active()
            .find(|(_, e)| circles_overlap(laser_pos, LASER_RADIUS, e.pos, ENEMY_RADIUS))
            .map(|(i, e)| (i, e.pos));

        if let Some((ei, enemy_pos)) = hit {
            state.lasers.deactivate(li);
            state.enemies.deactivate(ei);
            state.score += 1;
            particles::burst(
                &mut state.particles,
                &mut state.rng,
                enemy_pos,
                EXPLOSION_PARTICLES,
                palette::EXPLOSION,
            );
            log::debug!("Enemy {} destroyed, score {}", ei, state.score);
        }
    }

    // Ship vs enemy
    let ship_pos = state.ship.pos;
    let rammed = state
        .enemies
        .iter_active()
        .find(|(_, e)| circles_overlap(ship_pos, SHIP_RADIUS, e.pos, ENEMY_RADIUS))
        .map(|(i, _)| i);

    if let Some(ei) = rammed {
        state.enemies.deactivate(ei);
        particles::burst(
            &mut state.particles,
            &mut state.rng,
            ship_pos,
            DEATH_PARTICLES,
            palette::SHIP_DEBRIS,
        );
        state.phase = GamePhase::GameOver;
        log::info!("Game over at tick {} with score {}", state.time_ticks, state.score);
    }
}
