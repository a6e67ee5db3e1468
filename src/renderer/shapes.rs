//! Shape generation for 2D primitives
//!
//! Every shape is emitted as a plain triangle list.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Single triangle
pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) -> [Vertex; 3] {
    [
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
    ]
}

/// Ship outline: nose forward, two rear corners
pub fn ship(center: Vec2, forward: Vec2, size: f32, color: [f32; 4]) -> [Vertex; 3] {
    let side = Vec2::new(-forward.y, forward.x);
    let nose = center + forward * size;
    let rear = center - forward * size * 0.6;
    triangle(nose, rear + side * size * 0.6, rear - side * size * 0.6, color)
}

/// Thick line segment as a quad
pub fn segment(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (width * 0.5);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;

    let mut vertices = Vec::with_capacity(6);
    vertices.extend(triangle(a, b, c, color));
    vertices.extend(triangle(c, b, d, color));
    vertices
}

/// Axis-aligned square centered on a point
pub fn square(center: Vec2, half: f32, color: [f32; 4]) -> Vec<Vertex> {
    let min = center - Vec2::splat(half);
    let max = center + Vec2::splat(half);
    let mut vertices = Vec::with_capacity(6);
    vertices.extend(triangle(min, Vec2::new(max.x, min.y), max, color));
    vertices.extend(triangle(min, max, Vec2::new(min.x, max.y), color));
    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        vertices.extend(triangle(
            center,
            center + Vec2::from_angle(theta1) * radius,
            center + Vec2::from_angle(theta2) * radius,
            color,
        ));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let dir1 = Vec2::from_angle((i as f32 / segments as f32) * TAU);
        let dir2 = Vec2::from_angle(((i + 1) as f32 / segments as f32) * TAU);

        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        // Two triangles per segment
        vertices.extend(triangle(inner1, outer1, inner2, color));
        vertices.extend(triangle(inner2, outer1, outer2, color));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_vertex_count() {
        assert_eq!(circle(Vec2::ZERO, 10.0, [1.0; 4], 16).len(), 48);
        assert_eq!(ring(Vec2::ZERO, 5.0, 10.0, [1.0; 4], 16).len(), 96);
    }

    #[test]
    fn test_ship_nose_leads() {
        let verts = ship(Vec2::ZERO, Vec2::X, 10.0, [1.0; 4]);
        assert_eq!(verts[0].position, [10.0, 0.0]);
        assert!(verts[1].position[0] < 0.0 && verts[2].position[0] < 0.0);
    }

    #[test]
    fn test_segment_width() {
        let verts = segment(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0, [1.0; 4]);
        assert_eq!(verts.len(), 6);
        assert!(verts.iter().all(|v| v.position[1].abs() <= 1.0 + 1e-6));
    }

    #[test]
    fn test_degenerate_segment_is_finite() {
        let verts = segment(Vec2::ONE, Vec2::ONE, 2.0, [1.0; 4]);
        assert!(verts.iter().all(|v| v.position.iter().all(|c| c.is_finite())));
    }
}
