//! Mapping between the logical arena and the physical screen
//!
//! Two modes are supported:
//! - Letterbox: a fixed logical resolution uniformly scaled into the screen,
//!   centered, with pointer input mapped back through the inverse transform.
//! - Proportional rescale: the arena tracks the screen size and every live
//!   entity is stretched by the per-axis size ratio when the screen resizes.
//!
//! A zero or non-finite screen size never produces a mapping; callers keep
//! the previous one for that frame.

use glam::Vec2;

use crate::sim::GameState;
use crate::ui::Rect;

/// Uniform scale plus translation from logical to physical space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f32,
    pub offset: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        offset: Vec2::ZERO,
    };

    #[inline]
    pub fn to_physical(&self, logical: Vec2) -> Vec2 {
        logical * self.scale + self.offset
    }

    #[inline]
    pub fn to_logical(&self, physical: Vec2) -> Vec2 {
        (physical - self.offset) / self.scale
    }
}

fn usable(size: Vec2) -> bool {
    size.is_finite() && size.x > 0.0 && size.y > 0.0
}

/// Fit of a fixed logical resolution inside a physical screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letterbox {
    pub scale: f32,
    /// Destination rectangle in physical pixels
    pub dest: Rect,
}

impl Letterbox {
    /// Compute the fit, or `None` if either size is degenerate
    pub fn fit(screen: Vec2, logical: Vec2) -> Option<Self> {
        if !usable(screen) || !usable(logical) {
            return None;
        }
        let scale = (screen.x / logical.x).min(screen.y / logical.y);
        let size = logical * scale;
        let origin = (screen - size) * 0.5;
        Some(Self {
            scale,
            dest: Rect::new(origin, size),
        })
    }

    pub fn transform(&self) -> ViewTransform {
        ViewTransform {
            scale: self.scale,
            offset: self.dest.origin,
        }
    }

    /// Map a physical pointer position into logical space
    pub fn to_logical(&self, physical: Vec2) -> Vec2 {
        self.transform().to_logical(physical)
    }
}

/// Stretch every live entity from a `prev`-sized arena to a `next`-sized one.
///
/// Returns false (and changes nothing) when either size is degenerate.
pub fn rescale_entities(state: &mut GameState, prev: Vec2, next: Vec2) -> bool {
    if !usable(prev) || !usable(next) {
        return false;
    }
    let ratio = next / prev;

    state.ship.pos *= ratio;
    state.lasers.for_each_active_mut(|_, l| l.pos *= ratio);
    state.enemies.for_each_active_mut(|_, e| e.pos *= ratio);
    state.particles.for_each_active_mut(|_, p| p.pos *= ratio);
    state.bounds = next;
    true
}
