//! Platform abstraction layer
//!
//! The presentation layer (window, GPU, OS input) lives behind `Platform`.
//! Each frame it hands over raw input and timing, then receives the
//! resulting snapshot to draw.

use glam::Vec2;

use crate::input::{KeyboardState, PointerState, TouchPoint};
use crate::session::Session;
use crate::sim::Snapshot;
use crate::viewport::ViewTransform;

/// Everything the presentation layer reports for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Simulated seconds since the previous frame
    pub dt: f32,
    /// Physical screen size in pixels
    pub screen: Vec2,
    pub keys: KeyboardState,
    /// Touches in physical pixels
    pub touches: Vec<TouchPoint>,
    /// Pointer in physical pixels
    pub pointer: PointerState,
    /// Window close / terminate request
    pub close_requested: bool,
}

/// A presentation layer: supplies input, paces frames, draws snapshots
pub trait Platform {
    /// Block until the next frame is due and report its input
    fn poll(&mut self) -> FrameInput;

    /// Draw a finished frame
    fn present(&mut self, snapshot: &Snapshot, view: &ViewTransform);
}

/// Run the fixed-cadence loop until the platform asks to close.
///
/// The tick on which the close request arrives is completed and presented
/// before returning. Returns the number of frames run.
pub fn run<P: Platform>(session: &mut Session, platform: &mut P) -> u64 {
    let mut frames = 0u64;
    loop {
        let input = platform.poll();
        let snapshot = session.frame(&input);
        platform.present(&snapshot, &session.view());
        frames += 1;

        if input.close_requested {
            log::info!("Close requested after {} frames", frames);
            return frames;
        }
    }
}
