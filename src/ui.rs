//! Hit-test geometry for on-screen UI
//!
//! Only the retry button matters to the core: clicking it restarts the run.
//! All coordinates are logical.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Size of the retry button
pub const RETRY_BUTTON_SIZE: Vec2 = Vec2::new(200.0, 50.0);
/// Vertical offset of the retry button below the arena center
pub const RETRY_BUTTON_DROP: f32 = 60.0;

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Rectangle of `size` centered on `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self {
            origin: center - size * 0.5,
            size,
        }
    }

    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    /// Edges inclusive
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.x <= max.x && p.y >= self.origin.y && p.y <= max.y
    }
}

/// Retry button shown on the game over screen
pub fn retry_button(bounds: Vec2) -> Rect {
    let center = bounds * 0.5 + Vec2::new(0.0, RETRY_BUTTON_DROP);
    Rect::centered(center, RETRY_BUTTON_SIZE)
}
