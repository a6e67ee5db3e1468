//! Per-frame driver
//!
//! Joins the input adapter, the viewport mapping and the simulation tick for
//! one presentation variant. Owns the game state; callers only see
//! snapshots.

use glam::Vec2;

use crate::input::{InputAdapter, TouchLayout, TouchPoint};
use crate::platform::FrameInput;
use crate::settings::{PresentationMode, Settings};
use crate::sim::{GameState, Snapshot, TickInput, tick};
use crate::ui;
use crate::viewport::{Letterbox, ViewTransform, rescale_entities};

pub struct Session {
    settings: Settings,
    state: GameState,
    input: InputAdapter,
    /// Logical to physical mapping used for drawing and pointer input
    view: ViewTransform,
}

impl Session {
    pub fn new(settings: Settings, seed: u64) -> Self {
        let state = GameState::new(seed, settings.initial_bounds());
        let input = InputAdapter::new(settings.touch_controls, settings.max_touch_speed);
        log::info!(
            "Session started: mode={}, arena={}x{}, seed={}",
            settings.mode.as_str(),
            state.bounds.x,
            state.bounds.y,
            seed
        );
        Self {
            settings,
            state,
            input,
            view: ViewTransform::IDENTITY,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn view(&self) -> ViewTransform {
        self.view
    }

    pub fn input(&self) -> &InputAdapter {
        &self.input
    }

    /// Touch control placement in logical space, if touch is enabled
    pub fn touch_layout(&self) -> Option<TouchLayout> {
        self.settings
            .touch_controls
            .then(|| TouchLayout::for_screen(self.state.bounds))
    }

    /// Run one frame: map viewport and input, tick, and capture the result
    pub fn frame(&mut self, frame: &FrameInput) -> Snapshot {
        self.update_viewport(frame.screen);

        let view = self.view;
        let touches: Vec<TouchPoint> = frame
            .touches
            .iter()
            .map(|t| TouchPoint {
                pos: view.to_logical(t.pos),
                ..*t
            })
            .collect();
        let pointer = view.to_logical(frame.pointer.pos);

        let command = self
            .input
            .command(&frame.keys, &touches, self.state.bounds, &self.state.ship);
        let retry = frame.keys.retry_pressed
            || (frame.pointer.left_pressed && ui::retry_button(self.state.bounds).contains(pointer));

        tick(&mut self.state, &TickInput { command, retry }, frame.dt);
        Snapshot::capture(&self.state)
    }

    fn update_viewport(&mut self, screen: Vec2) {
        match self.settings.mode {
            PresentationMode::Fixed => {}
            PresentationMode::Resizable => {
                let prev = self.state.bounds;
                if screen != prev && rescale_entities(&mut self.state, prev, screen) {
                    log::debug!("Resized {}x{} -> {}x{}", prev.x, prev.y, screen.x, screen.y);
                }
            }
            PresentationMode::Letterbox => {
                if let Some(fit) = Letterbox::fit(screen, self.settings.virtual_size()) {
                    self.view = fit.transform();
                }
            }
        }
    }
}
