//! Input handling
//!
//! Keyboard state and multi-touch gestures (virtual joystick plus fire
//! button) are folded into a single `Command` before the simulation runs.
//! Keyboard deltas are always applied; touch adjusts them further.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::collision::point_in_circle;
use crate::sim::{Command, Spaceship};
use crate::{normalize_degrees, shortest_angle_delta};

/// Logical keys held this frame, plus press edges for fire and retry
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyboardState {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust_up: bool,
    pub thrust_down: bool,
    /// Fire key went down this frame (not held)
    pub fire_pressed: bool,
    /// Retry key went down this frame
    pub retry_pressed: bool,
}

/// Lifecycle of a touch point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchPhase {
    /// Finger landed this frame
    Began,
    /// Finger still down
    Moved,
    /// Finger lifted this frame
    Ended,
}

/// A single touch, identified stably across frames
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub id: u64,
    pub pos: Vec2,
    pub phase: TouchPhase,
}

/// Mouse position and left button press edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerState {
    pub pos: Vec2,
    pub left_pressed: bool,
}

/// On-screen placement of the joystick and fire button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchLayout {
    pub joystick_center: Vec2,
    pub fire_center: Vec2,
    /// Shared radius of both circles
    pub radius: f32,
}

impl TouchLayout {
    /// Joystick in the bottom-left corner, fire button in the bottom-right
    pub fn for_screen(size: Vec2) -> Self {
        let radius = JOYSTICK_RADIUS_FRACTION * size.x.min(size.y);
        let inset = radius * 2.0;
        Self {
            joystick_center: Vec2::new(inset, size.y - inset),
            fire_center: Vec2::new(size.x - inset, size.y - inset),
            radius,
        }
    }
}

/// Turns raw per-frame input into a simulation `Command`
#[derive(Debug, Clone)]
pub struct InputAdapter {
    touch_enabled: bool,
    max_touch_speed: f32,
    /// Touch currently steering the joystick
    joystick_touch: Option<u64>,
    /// Touch currently holding the fire button
    fire_touch: Option<u64>,
}

impl InputAdapter {
    pub fn new(touch_enabled: bool, max_touch_speed: f32) -> Self {
        Self {
            touch_enabled,
            max_touch_speed,
            joystick_touch: None,
            fire_touch: None,
        }
    }

    pub fn joystick_touch(&self) -> Option<u64> {
        self.joystick_touch
    }

    pub fn fire_touch(&self) -> Option<u64> {
        self.fire_touch
    }

    /// Drop all touch bindings
    pub fn reset(&mut self) {
        self.joystick_touch = None;
        self.fire_touch = None;
    }

    /// Build this tick's command. `screen` is the size of the space the
    /// touch positions are expressed in.
    pub fn command(
        &mut self,
        keys: &KeyboardState,
        touches: &[TouchPoint],
        screen: Vec2,
        ship: &Spaceship,
    ) -> Command {
        let mut cmd = keyboard_command(keys);
        if self.touch_enabled {
            self.apply_touch(&mut cmd, touches, screen, ship);
        }
        cmd
    }

    fn apply_touch(&mut self, cmd: &mut Command, touches: &[TouchPoint], screen: Vec2, ship: &Spaceship) {
        let layout = TouchLayout::for_screen(screen);

        // Release bindings whose finger lifted or vanished
        let still_down = |id: u64| {
            touches
                .iter()
                .any(|t| t.id == id && t.phase != TouchPhase::Ended)
        };
        if self.joystick_touch.is_some_and(|id| !still_down(id)) {
            self.joystick_touch = None;
        }
        if self.fire_touch.is_some_and(|id| !still_down(id)) {
            self.fire_touch = None;
        }

        for touch in touches.iter().filter(|t| t.phase == TouchPhase::Began) {
            if self.joystick_touch.is_none()
                && point_in_circle(touch.pos, layout.joystick_center, layout.radius)
            {
                self.joystick_touch = Some(touch.id);
            } else if self.fire_touch.is_none()
                && point_in_circle(touch.pos, layout.fire_center, layout.radius)
            {
                self.fire_touch = Some(touch.id);
                cmd.fire = true;
            }
        }

        // Steering starts from where the keyboard already put the ship
        let rotation = normalize_degrees(ship.rotation + cmd.rotate_delta);
        let speed = (ship.speed + cmd.thrust_delta).clamp(0.0, SHIP_MAX_SPEED);

        let stick = self
            .joystick_touch
            .and_then(|id| touches.iter().find(|t| t.id == id))
            .map(|t| t.pos);

        match stick {
            Some(pos) if layout.radius > 0.0 => {
                let offset = (pos - layout.joystick_center).clamp_length_max(layout.radius);
                let magnitude = offset.length();

                if magnitude > JOYSTICK_DEAD_ZONE * layout.radius {
                    let target = normalize_degrees(offset.y.atan2(offset.x).to_degrees());
                    let turn = shortest_angle_delta(rotation, target);
                    cmd.rotate_delta += turn.clamp(-ROTATION_STEP, ROTATION_STEP);
                }

                let target_speed = magnitude / layout.radius * self.max_touch_speed;
                cmd.thrust_delta +=
                    (target_speed - speed).clamp(-JOYSTICK_SPEED_EASE, JOYSTICK_SPEED_EASE);
            }
            Some(_) => {}
            None => {
                cmd.thrust_delta -= speed.min(TOUCH_FRICTION);
            }
        }
    }
}

fn keyboard_command(keys: &KeyboardState) -> Command {
    let mut cmd = Command::default();
    if keys.rotate_right {
        cmd.rotate_delta += ROTATION_STEP;
    }
    if keys.rotate_left {
        cmd.rotate_delta -= ROTATION_STEP;
    }
    if keys.thrust_up {
        cmd.thrust_delta += THRUST_STEP;
    }
    if keys.thrust_down {
        cmd.thrust_delta -= THRUST_STEP;
    }
    cmd.fire = keys.fire_pressed;
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Vec2 = Vec2::new(800.0, 600.0);

    fn touch(id: u64, pos: Vec2, phase: TouchPhase) -> TouchPoint {
        TouchPoint { id, pos, phase }
    }

    fn ship(rotation: f32, speed: f32) -> Spaceship {
        Spaceship {
            pos: Vec2::new(400.0, 300.0),
            rotation,
            speed,
        }
    }

    fn layout() -> TouchLayout {
        TouchLayout::for_screen(SCREEN)
    }

    #[test]
    fn test_layout_radius() {
        let l = layout();
        assert_eq!(l.radius, 60.0);
        assert_eq!(l.joystick_center, Vec2::new(120.0, 480.0));
        assert_eq!(l.fire_center, Vec2::new(680.0, 480.0));
    }

    #[test]
    fn test_keyboard_only() {
        let mut input = InputAdapter::new(false, MAX_TOUCH_SPEED);
        let keys = KeyboardState {
            rotate_right: true,
            thrust_up: true,
            fire_pressed: true,
            ..Default::default()
        };
        let cmd = input.command(&keys, &[], SCREEN, &ship(0.0, 0.0));
        assert_eq!(cmd.rotate_delta, ROTATION_STEP);
        assert_eq!(cmd.thrust_delta, THRUST_STEP);
        assert!(cmd.fire);

        let keys = KeyboardState {
            rotate_left: true,
            thrust_down: true,
            ..Default::default()
        };
        let cmd = input.command(&keys, &[], SCREEN, &ship(0.0, 1.0));
        assert_eq!(cmd.rotate_delta, -ROTATION_STEP);
        assert_eq!(cmd.thrust_delta, -THRUST_STEP);
        assert!(!cmd.fire);
    }

    #[test]
    fn test_friction_without_joystick() {
        let mut input = InputAdapter::new(true, MAX_TOUCH_SPEED);
        let cmd = input.command(&KeyboardState::default(), &[], SCREEN, &ship(0.0, 1.0));
        assert!((cmd.thrust_delta + TOUCH_FRICTION).abs() < 1e-6);

        // Friction never pushes speed below zero
        let cmd = input.command(&KeyboardState::default(), &[], SCREEN, &ship(0.0, 0.01));
        assert!((cmd.thrust_delta + 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_joystick_binds_and_steers() {
        let mut input = InputAdapter::new(true, MAX_TOUCH_SPEED);
        let center = layout().joystick_center;

        // Land at center, then push straight down (90 degrees)
        let touches = [touch(7, center, TouchPhase::Began)];
        input.command(&KeyboardState::default(), &touches, SCREEN, &ship(0.0, 0.0));
        assert_eq!(input.joystick_touch(), Some(7));

        let touches = [touch(7, center + Vec2::new(0.0, 200.0), TouchPhase::Moved)];
        let cmd = input.command(&KeyboardState::default(), &touches, SCREEN, &ship(80.0, 0.0));
        // Clamped to radius: full deflection, turn capped at one step
        assert_eq!(cmd.rotate_delta, ROTATION_STEP);
        assert!((cmd.thrust_delta - JOYSTICK_SPEED_EASE).abs() < 1e-6);

        // Nearly there: only the remaining distance
        let cmd = input.command(&KeyboardState::default(), &touches, SCREEN, &ship(88.0, 0.0));
        assert!((cmd.rotate_delta - 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_joystick_shortest_path_across_zero() {
        let mut input = InputAdapter::new(true, MAX_TOUCH_SPEED);
        let center = layout().joystick_center;
        input.command(
            &KeyboardState::default(),
            &[touch(1, center, TouchPhase::Began)],
            SCREEN,
            &ship(0.0, 0.0),
        );

        // Pointing right (0 degrees) while facing 350: turn positive
        let touches = [touch(1, center + Vec2::new(50.0, 0.0), TouchPhase::Moved)];
        let cmd = input.command(&KeyboardState::default(), &touches, SCREEN, &ship(350.0, 0.0));
        assert_eq!(cmd.rotate_delta, ROTATION_STEP);

        // Facing 10: turn negative
        let cmd = input.command(&KeyboardState::default(), &touches, SCREEN, &ship(10.0, 0.0));
        assert_eq!(cmd.rotate_delta, -ROTATION_STEP);
    }

    #[test]
    fn test_joystick_dead_zone_holds_rotation() {
        let mut input = InputAdapter::new(true, MAX_TOUCH_SPEED);
        let center = layout().joystick_center;
        let touches = [touch(3, center + Vec2::new(0.0, 5.0), TouchPhase::Began)];
        let cmd = input.command(&KeyboardState::default(), &touches, SCREEN, &ship(0.0, 2.0));
        assert_eq!(cmd.rotate_delta, 0.0);
        // Speed eases down toward the small target
        assert!((cmd.thrust_delta + JOYSTICK_SPEED_EASE).abs() < 1e-6);
    }

    #[test]
    fn test_joystick_release() {
        let mut input = InputAdapter::new(true, MAX_TOUCH_SPEED);
        let center = layout().joystick_center;
        input.command(
            &KeyboardState::default(),
            &[touch(4, center, TouchPhase::Began)],
            SCREEN,
            &ship(0.0, 0.0),
        );
        assert_eq!(input.joystick_touch(), Some(4));

        input.command(
            &KeyboardState::default(),
            &[touch(4, center, TouchPhase::Ended)],
            SCREEN,
            &ship(0.0, 0.0),
        );
        assert_eq!(input.joystick_touch(), None);

        // A vanished id also releases
        input.command(
            &KeyboardState::default(),
            &[touch(5, center, TouchPhase::Began)],
            SCREEN,
            &ship(0.0, 0.0),
        );
        input.command(&KeyboardState::default(), &[], SCREEN, &ship(0.0, 0.0));
        assert_eq!(input.joystick_touch(), None);
    }

    #[test]
    fn test_touch_outside_controls_ignored() {
        let mut input = InputAdapter::new(true, MAX_TOUCH_SPEED);
        let touches = [touch(9, Vec2::new(400.0, 100.0), TouchPhase::Began)];
        let cmd = input.command(&KeyboardState::default(), &touches, SCREEN, &ship(0.0, 0.0));
        assert_eq!(input.joystick_touch(), None);
        assert_eq!(input.fire_touch(), None);
        assert!(!cmd.fire);
    }

    #[test]
    fn test_fire_button_edge_triggered() {
        let mut input = InputAdapter::new(true, MAX_TOUCH_SPEED);
        let fire = layout().fire_center;

        let cmd = input.command(
            &KeyboardState::default(),
            &[touch(2, fire, TouchPhase::Began)],
            SCREEN,
            &ship(0.0, 0.0),
        );
        assert!(cmd.fire);
        assert_eq!(input.fire_touch(), Some(2));

        // Holding does not repeat
        let cmd = input.command(
            &KeyboardState::default(),
            &[touch(2, fire, TouchPhase::Moved)],
            SCREEN,
            &ship(0.0, 0.0),
        );
        assert!(!cmd.fire);

        // Lift and tap again
        input.command(
            &KeyboardState::default(),
            &[touch(2, fire, TouchPhase::Ended)],
            SCREEN,
            &ship(0.0, 0.0),
        );
        assert_eq!(input.fire_touch(), None);
        let cmd = input.command(
            &KeyboardState::default(),
            &[touch(8, fire, TouchPhase::Began)],
            SCREEN,
            &ship(0.0, 0.0),
        );
        assert!(cmd.fire);
    }

    #[test]
    fn test_keyboard_and_touch_are_additive() {
        let mut input = InputAdapter::new(true, MAX_TOUCH_SPEED);
        let center = layout().joystick_center;
        let touches = [touch(1, center + Vec2::new(0.0, 60.0), TouchPhase::Began)];
        let keys = KeyboardState {
            rotate_right: true,
            ..Default::default()
        };
        // Facing 0, keyboard turns to 5, joystick wants 90: another step on top
        let cmd = input.command(&keys, &touches, SCREEN, &ship(0.0, 0.0));
        assert_eq!(cmd.rotate_delta, 2.0 * ROTATION_STEP);
    }
}
