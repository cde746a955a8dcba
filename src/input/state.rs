//! Input state management
//!
//! Polls keyboard, touch, mouse and gamepad once per frame and folds them
//! into one [`InputSnapshot`] the simulation reads immutably.

use macroquad::prelude::*;

use super::touch::{TouchControls, TouchPoint, TouchSample};
use super::{Action, Gamepad};

/// Everything the simulation needs to know about the player this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub move_left: bool,
    pub move_right: bool,
    /// Jump was pressed this frame (edge, not held)
    pub jump_pressed: bool,
    /// Restart was pressed this frame (edge, not held)
    pub restart_pressed: bool,
}

impl InputSnapshot {
    /// Logical OR of two sources
    pub fn merge(self, other: InputSnapshot) -> Self {
        Self {
            move_left: self.move_left || other.move_left,
            move_right: self.move_right || other.move_right,
            jump_pressed: self.jump_pressed || other.jump_pressed,
            restart_pressed: self.restart_pressed || other.restart_pressed,
        }
    }
}

impl From<TouchSample> for InputSnapshot {
    fn from(touch: TouchSample) -> Self {
        Self {
            move_left: touch.left,
            move_right: touch.right,
            jump_pressed: touch.jump,
            restart_pressed: touch.restart,
        }
    }
}

/// Owns the device handles that need per-frame polling
pub struct InputState {
    gamepad: Gamepad,
    /// Touches and mouse presses seen during the last poll
    points: Vec<TouchPoint>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            gamepad: Gamepad::new(),
            points: Vec::new(),
        }
    }

    /// Call once per frame; `terminal` selects which touch buttons are live
    pub fn poll(&mut self, touch: &TouchControls, terminal: bool) -> InputSnapshot {
        self.gamepad.poll();
        self.points = collect_points();

        let snapshot = keyboard_snapshot()
            .merge(touch.sample(&self.points, terminal).into())
            .merge(self.gamepad_snapshot());

        if snapshot.jump_pressed || snapshot.restart_pressed {
            log::trace!("Input edge: {:?}", snapshot);
        }
        snapshot
    }

    /// Touch points from the last poll, for drawing held buttons
    pub fn points(&self) -> &[TouchPoint] {
        &self.points
    }

    fn gamepad_snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            move_left: self.gamepad.left_held(),
            move_right: self.gamepad.right_held(),
            jump_pressed: self.gamepad.jump_pressed(),
            restart_pressed: self.gamepad.restart_pressed(),
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn keyboard_active(action: Action) -> bool {
    if action.is_edge_triggered() {
        action.keys().iter().any(|&k| is_key_pressed(k))
    } else {
        action.keys().iter().any(|&k| is_key_down(k))
    }
}

fn keyboard_snapshot() -> InputSnapshot {
    InputSnapshot {
        move_left: keyboard_active(Action::MoveLeft),
        move_right: keyboard_active(Action::MoveRight),
        jump_pressed: keyboard_active(Action::Jump),
        restart_pressed: keyboard_active(Action::Restart),
    }
}

/// Active touches plus the left mouse button as one more pointer
fn collect_points() -> Vec<TouchPoint> {
    let mut points: Vec<TouchPoint> = touches()
        .into_iter()
        .filter(|t| !matches!(t.phase, TouchPhase::Ended | TouchPhase::Cancelled))
        .map(|t| TouchPoint {
            x: t.position.x,
            y: t.position.y,
            just_started: t.phase == TouchPhase::Started,
        })
        .collect();

    if is_mouse_button_down(MouseButton::Left) {
        let (x, y) = mouse_position();
        points.push(TouchPoint {
            x,
            y,
            just_started: is_mouse_button_pressed(MouseButton::Left),
        });
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_is_or() {
        let keys = InputSnapshot { move_left: true, ..Default::default() };
        let pad = InputSnapshot { jump_pressed: true, ..Default::default() };
        let merged = keys.merge(pad);
        assert!(merged.move_left && merged.jump_pressed);
        assert!(!merged.move_right && !merged.restart_pressed);
        assert_eq!(merged.merge(InputSnapshot::default()), merged);
    }

    #[test]
    fn test_touch_sample_maps_to_actions() {
        let snapshot: InputSnapshot = TouchSample { right: true, jump: true, ..Default::default() }.into();
        assert_eq!(
            snapshot,
            InputSnapshot { move_right: true, jump_pressed: true, ..Default::default() }
        );
    }
}
