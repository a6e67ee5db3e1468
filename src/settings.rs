//! Game settings
//!
//! Stored as JSON next to the binary. Selects one of the three presentation
//! variants and the sizes each one uses.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_TOUCH_SPEED;

/// How the logical arena relates to the physical screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PresentationMode {
    /// Fixed window, arena equals window size
    Fixed,
    /// Resizable window, entities stretched on resize, touch controls
    #[default]
    Resizable,
    /// Fixed virtual resolution letterboxed into the screen
    Letterbox,
}

impl PresentationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresentationMode::Fixed => "Fixed",
            PresentationMode::Resizable => "Resizable",
            PresentationMode::Letterbox => "Letterbox",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fixed" => Some(PresentationMode::Fixed),
            "resizable" | "resize" => Some(PresentationMode::Resizable),
            "letterbox" | "virtual" => Some(PresentationMode::Letterbox),
            _ => None,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub mode: PresentationMode,

    // === Window ===
    /// Window size (arena size in Fixed mode, initial size in Resizable)
    pub window_width: f32,
    pub window_height: f32,
    /// Logical resolution in Letterbox mode
    pub virtual_width: f32,
    pub virtual_height: f32,
    /// Frame rate the loop paces itself to
    pub target_fps: u32,

    // === Input ===
    /// Virtual joystick and fire button
    pub touch_controls: bool,
    /// Ship speed at full joystick deflection
    pub max_touch_speed: f32,

    // === Simulation ===
    /// RNG seed; when absent the launcher picks one
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::for_mode(PresentationMode::default())
    }
}

impl Settings {
    /// Defaults for a presentation variant
    pub fn for_mode(mode: PresentationMode) -> Self {
        Self {
            mode,
            window_width: 800.0,
            window_height: 600.0,
            virtual_width: 1000.0,
            virtual_height: 600.0,
            target_fps: 60,
            touch_controls: mode == PresentationMode::Resizable,
            max_touch_speed: MAX_TOUCH_SPEED,
            seed: None,
        }
    }

    pub fn window_size(&self) -> Vec2 {
        Vec2::new(self.window_width, self.window_height)
    }

    pub fn virtual_size(&self) -> Vec2 {
        Vec2::new(self.virtual_width, self.virtual_height)
    }

    /// Arena size the simulation starts with
    pub fn initial_bounds(&self) -> Vec2 {
        match self.mode {
            PresentationMode::Letterbox => self.virtual_size(),
            PresentationMode::Fixed | PresentationMode::Resizable => self.window_size(),
        }
    }

    /// Seconds per frame at the target rate
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write settings as JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
