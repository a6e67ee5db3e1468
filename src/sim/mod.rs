//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Per-tick displacement, timers driven by the supplied dt
//! - Seeded RNG only
//! - Stable iteration order (by slot index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod particles;
pub mod pool;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, point_in_circle};
pub use pool::{Pool, Slot};
pub use snapshot::{LaserView, ParticleView, ShipView, Snapshot};
pub use state::{Enemy, GamePhase, GameState, Laser, Particle, Rgb, Spaceship, Timers, in_bounds};
pub use tick::{Command, TickInput, tick, wrap_position};
