//! Laser Drift entry point
//!
//! Native headless build: runs the simulation against an autopilot that
//! plays the game, then prints the final frame as JSON.
//!
//! Usage: `laser-drift [settings.json] [frames]`

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use laser_drift::input::{KeyboardState, TouchLayout};
use laser_drift::platform::{self, FrameInput, Platform};
use laser_drift::renderer;
use laser_drift::sim::{GamePhase, Snapshot};
use laser_drift::viewport::ViewTransform;
use laser_drift::{Session, Settings, shortest_angle_delta};

const DEFAULT_FRAMES: u64 = 60 * 60;
/// Frames between autopilot shots
const FIRE_INTERVAL: u64 = 8;

/// Plays the game: turns toward the nearest enemy and fires on a cadence
struct Autopilot {
    screen: Vec2,
    dt: f32,
    frames_left: u64,
    frame: u64,
    last: Option<Snapshot>,
    touch: Option<TouchLayout>,
    vertices_drawn: usize,
    deaths: u32,
    best_score: u64,
}

impl Autopilot {
    fn steer(&self) -> KeyboardState {
        let mut keys = KeyboardState::default();
        let Some(snap) = &self.last else {
            return keys;
        };

        if snap.phase == GamePhase::GameOver {
            keys.retry_pressed = true;
            return keys;
        }

        let ship = snap.ship.pos;
        let nearest = snap.enemies.iter().min_by(|a, b| {
            a.distance_squared(ship)
                .partial_cmp(&b.distance_squared(ship))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        if let Some(&enemy) = nearest {
            let to_enemy = enemy - ship;
            let target = to_enemy.y.atan2(to_enemy.x).to_degrees();
            let turn = shortest_angle_delta(snap.ship.rotation, target);
            keys.rotate_right = turn > 2.5;
            keys.rotate_left = turn < -2.5;
            // Keep distance: back off when close, drift forward when far
            keys.thrust_down = to_enemy.length() < 150.0;
            keys.thrust_up = to_enemy.length() > 300.0;
        }
        keys.fire_pressed = self.frame % FIRE_INTERVAL == 0;
        keys
    }
}

impl Platform for Autopilot {
    fn poll(&mut self) -> FrameInput {
        self.frame += 1;
        self.frames_left = self.frames_left.saturating_sub(1);
        FrameInput {
            dt: self.dt,
            screen: self.screen,
            keys: self.steer(),
            close_requested: self.frames_left == 0,
            ..Default::default()
        }
    }

    fn present(&mut self, snapshot: &Snapshot, view: &ViewTransform) {
        let vertices = renderer::build_frame(snapshot, view, self.touch.as_ref());
        self.vertices_drawn += vertices.len();

        let was_playing = self
            .last
            .as_ref()
            .is_some_and(|prev| prev.phase == GamePhase::Playing);
        if was_playing && snapshot.phase == GamePhase::GameOver {
            self.deaths += 1;
        }
        self.best_score = self.best_score.max(snapshot.score);
        self.last = Some(snapshot.clone());
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let settings_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("laser-drift.json"));
    let frames = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let settings = Settings::load(&settings_path);
    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    log::info!("Laser Drift (native, headless) starting...");
    let dt = settings.frame_dt();
    let screen = settings.window_size();
    let mut session = Session::new(settings, seed);
    let mut pilot = Autopilot {
        screen,
        dt,
        frames_left: frames.max(1),
        frame: 0,
        last: None,
        touch: session.touch_layout(),
        vertices_drawn: 0,
        deaths: 0,
        best_score: 0,
    };

    let ran = platform::run(&mut session, &mut pilot);
    log::info!(
        "Ran {} frames: best score {}, {} deaths, {} vertices drawn",
        ran,
        pilot.best_score,
        pilot.deaths,
        pilot.vertices_drawn
    );

    if let Some(last) = &pilot.last {
        match serde_json::to_string_pretty(last) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Could not serialize final frame: {}", e),
        }
    }
}
