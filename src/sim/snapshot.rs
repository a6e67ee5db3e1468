//! Render-facing view of the simulation
//!
//! Built once per tick by value; the presentation layer never touches the
//! pools directly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState, Rgb};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    pub pos: Vec2,
    /// Degrees
    pub rotation: f32,
    /// Hidden once the ship is destroyed
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaserView {
    pub pos: Vec2,
    pub rotation: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleView {
    pub pos: Vec2,
    pub color: Rgb,
    pub alpha: f32,
}

/// Everything needed to draw one frame, in logical coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub bounds: Vec2,
    pub ship: ShipView,
    pub lasers: Vec<LaserView>,
    pub enemies: Vec<Vec2>,
    pub particles: Vec<ParticleView>,
    pub score: u64,
    pub phase: GamePhase,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            bounds: state.bounds,
            ship: ShipView {
                pos: state.ship.pos,
                rotation: state.ship.rotation,
                visible: state.phase == GamePhase::Playing,
            },
            lasers: state
                .lasers
                .iter_active()
                .map(|(_, l)| LaserView {
                    pos: l.pos,
                    rotation: l.rotation,
                })
                .collect(),
            enemies: state.enemies.iter_active().map(|(_, e)| e.pos).collect(),
            particles: state
                .particles
                .iter_active()
                .map(|(_, p)| ParticleView {
                    pos: p.pos,
                    color: p.color,
                    alpha: p.alpha,
                })
                .collect(),
            score: state.score,
            phase: state.phase,
        }
    }
}
