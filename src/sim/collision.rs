//! Collision predicates for circular hit areas
//!
//! Every entity in the arena is treated as a circle (lasers as tiny ones).
//! Boundaries are inclusive: touching counts as a hit.

use glam::Vec2;

/// Check whether a point lies inside (or on) a circle
#[inline]
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance(center) <= radius
}

/// Check whether two circles overlap (or touch)
#[inline]
pub fn circles_overlap(c1: Vec2, r1: f32, c2: Vec2, r2: f32) -> bool {
    c1.distance(c2) <= r1 + r2
}
