//! Draw list generation
//!
//! Turns a simulation snapshot into a triangle list in physical pixels.
//! Uploading and drawing the list is up to the platform.

pub mod shapes;
pub mod vertex;

use glam::Vec2;

use crate::consts::{ENEMY_RADIUS, SHIP_RADIUS};
use crate::heading;
use crate::input::TouchLayout;
use crate::sim::Snapshot;
use crate::viewport::ViewTransform;

pub use vertex::{Vertex, as_bytes, colors};

/// Drawn length of a laser bolt
const LASER_LENGTH: f32 = 10.0;
const LASER_WIDTH: f32 = 2.0;
/// Half the side of a particle square
const PARTICLE_HALF: f32 = 1.5;
const CIRCLE_SEGMENTS: u32 = 24;

/// Build the frame's triangles, back to front: particles, enemies, lasers,
/// ship, touch controls
pub fn build_frame(
    snapshot: &Snapshot,
    view: &ViewTransform,
    touch: Option<&TouchLayout>,
) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for p in &snapshot.particles {
        let color = [p.color[0], p.color[1], p.color[2], p.alpha];
        vertices.extend(shapes::square(p.pos, PARTICLE_HALF, color));
    }

    for &enemy in &snapshot.enemies {
        vertices.extend(shapes::circle(enemy, ENEMY_RADIUS, colors::ENEMY, CIRCLE_SEGMENTS));
    }

    for laser in &snapshot.lasers {
        let tail = laser.pos - heading(laser.rotation) * LASER_LENGTH;
        vertices.extend(shapes::segment(tail, laser.pos, LASER_WIDTH, colors::LASER));
    }

    if snapshot.ship.visible {
        let forward = heading(snapshot.ship.rotation);
        vertices.extend(shapes::ship(snapshot.ship.pos, forward, SHIP_RADIUS, colors::SHIP));
    }

    if let Some(layout) = touch {
        let inner = layout.radius * 0.9;
        for center in [layout.joystick_center, layout.fire_center] {
            vertices.extend(shapes::ring(
                center,
                inner,
                layout.radius,
                colors::TOUCH_CONTROL,
                CIRCLE_SEGMENTS,
            ));
        }
    }

    for v in &mut vertices {
        v.position = view.to_physical(Vec2::from(v.position)).to_array();
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Enemy, GamePhase, GameState, Laser};

    fn state() -> GameState {
        let mut state = GameState::new(9, Vec2::new(1000.0, 600.0));
        state.enemies.spawn(Enemy::new(Vec2::new(100.0, 100.0)));
        state.lasers.spawn(Laser::new(Vec2::new(500.0, 300.0), 0.0));
        state
    }

    #[test]
    fn test_frame_contents() {
        let snap = Snapshot::capture(&state());
        let verts = build_frame(&snap, &ViewTransform::IDENTITY, None);
        // One enemy circle, one laser quad, one ship triangle
        assert_eq!(verts.len(), CIRCLE_SEGMENTS as usize * 3 + 6 + 3);
        assert_eq!(as_bytes(&verts).len(), verts.len() * Vertex::STRIDE);
    }

    #[test]
    fn test_hidden_ship_not_drawn() {
        let mut state = state();
        state.phase = GamePhase::GameOver;
        let verts = build_frame(&Snapshot::capture(&state), &ViewTransform::IDENTITY, None);
        assert_eq!(verts.len(), CIRCLE_SEGMENTS as usize * 3 + 6);
    }

    #[test]
    fn test_frame_mapped_to_physical() {
        let mut state = GameState::new(9, Vec2::new(1000.0, 600.0));
        state.ship.rotation = 0.0;
        let view = ViewTransform {
            scale: 2.0,
            offset: Vec2::new(60.0, 0.0),
        };
        let verts = build_frame(&Snapshot::capture(&state), &view, None);
        // Nose at (500 + 20, 300) logical
        assert_eq!(verts[0].position, [1100.0, 600.0]);
    }

    #[test]
    fn test_touch_controls_drawn() {
        let snap = Snapshot::capture(&GameState::new(9, Vec2::new(800.0, 600.0)));
        let layout = TouchLayout::for_screen(snap.bounds);
        let with = build_frame(&snap, &ViewTransform::IDENTITY, Some(&layout));
        let without = build_frame(&snap, &ViewTransform::IDENTITY, None);
        assert_eq!(with.len() - without.len(), 2 * CIRCLE_SEGMENTS as usize * 6);
    }
}
