//! On-screen touch controls
//!
//! The window is taller than the game canvas; the strip underneath hosts
//! three buttons (left, right, jump). On terminal screens the strip holds a
//! single restart button instead. Mouse clicks are hit-tested the same way
//! so the controls also work on desktop.

use crate::ui::theme::*;
use crate::ui::{Rect, Renderer};

/// Smallest strip height worth laying buttons into
const MIN_STRIP_HEIGHT: f32 = 96.0;

/// Gap between buttons and around the strip edge
const BUTTON_GAP: f32 = 8.0;

const RESTART_WIDTH: f32 = 240.0;
const RESTART_HEIGHT: f32 = 72.0;

/// A finger (or the mouse) on the screen this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
    /// Touch began this frame
    pub just_started: bool,
}

/// Which touch buttons are active this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchSample {
    pub left: bool,
    pub right: bool,
    /// A new touch landed on the jump button
    pub jump: bool,
    /// A new touch landed on the restart button
    pub restart: bool,
}

/// Button layout for the control strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchControls {
    strip: Rect,
    left: Rect,
    right: Rect,
    jump: Rect,
    restart: Rect,
}

impl TouchControls {
    /// Lay out the buttons under a canvas of `canvas_height` in a
    /// `screen_width` x `screen_height` window
    pub fn layout(screen_width: f32, screen_height: f32, canvas_height: f32) -> Self {
        let mut strip = Rect::new(0.0, canvas_height, screen_width, (screen_height - canvas_height).max(0.0));
        if strip.h < MIN_STRIP_HEIGHT {
            // Not enough room below the canvas, overlay its bottom edge
            strip = Rect::screen(screen_width, screen_height).slice_bottom(MIN_STRIP_HEIGHT);
        }

        let inner = strip.pad(BUTTON_GAP);
        let (moves, jump_area) = inner.split_h(2.0 / 3.0);
        let (left_area, right_area) = moves.split_h(0.5);

        let half_gap = BUTTON_GAP / 2.0;
        Self {
            strip,
            left: left_area.pad(half_gap),
            right: right_area.pad(half_gap),
            jump: jump_area.pad(half_gap),
            // Top of the strip, directly under the end-of-game banner
            restart: inner.slice_top(RESTART_HEIGHT).centered(RESTART_WIDTH, RESTART_HEIGHT),
        }
    }

    /// Hit-test the current touches against the visible buttons
    pub fn sample(&self, points: &[TouchPoint], terminal: bool) -> TouchSample {
        let mut sample = TouchSample::default();

        for p in points {
            if terminal {
                sample.restart |= p.just_started && self.restart.contains(p.x, p.y);
                continue;
            }
            sample.left |= self.left.contains(p.x, p.y);
            sample.right |= self.right.contains(p.x, p.y);
            sample.jump |= p.just_started && self.jump.contains(p.x, p.y);
        }

        sample
    }

    /// Draw the strip and its buttons, highlighting the held ones
    pub fn draw(&self, r: &mut impl Renderer, points: &[TouchPoint], terminal: bool) {
        r.fill_rect(self.strip, CONTROL_STRIP_BG);

        if terminal {
            let held = points.iter().any(|p| self.restart.contains(p.x, p.y));
            draw_button(r, self.restart, "Restart", held);
            return;
        }

        let held = |rect: &Rect| points.iter().any(|p| rect.contains(p.x, p.y));
        draw_button(r, self.left, "<", held(&self.left));
        draw_button(r, self.right, ">", held(&self.right));
        draw_button(r, self.jump, "Jump", held(&self.jump));
    }
}

fn draw_button(r: &mut impl Renderer, rect: Rect, label: &str, held: bool) {
    r.fill_rect(rect, if held { BUTTON_ACTIVE } else { BUTTON_BG });
    r.stroke_rect(rect, 2.0, BUTTON_BORDER);

    // Rough centring; label widths are not measured
    let approx_width = label.len() as f32 * FONT_SIZE_BUTTON * 0.5;
    r.text(
        label,
        rect.center_x() - approx_width / 2.0,
        rect.center_y() + FONT_SIZE_BUTTON / 3.0,
        FONT_SIZE_BUTTON,
        TEXT_LIGHT,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::DrawList;

    fn controls() -> TouchControls {
        // 800x1000 window, canvas takes the top 600
        TouchControls::layout(800.0, 1000.0, 600.0)
    }

    fn tap(rect: Rect, just_started: bool) -> TouchPoint {
        TouchPoint { x: rect.center_x(), y: rect.center_y(), just_started }
    }

    #[test]
    fn test_layout_fills_strip_under_canvas() {
        let c = controls();
        assert_eq!(c.strip, Rect::new(0.0, 600.0, 800.0, 400.0));
        assert!(c.left.right() <= c.right.x);
        assert!(c.right.right() <= c.jump.x);
        assert!(c.left.y >= 600.0 && c.jump.bottom() <= 1000.0);
        assert!(!c.left.overlaps(&c.right));
    }

    #[test]
    fn test_small_window_overlays_canvas() {
        let c = TouchControls::layout(800.0, 620.0, 600.0);
        assert_eq!(c.strip, Rect::new(0.0, 620.0 - MIN_STRIP_HEIGHT, 800.0, MIN_STRIP_HEIGHT));
    }

    #[test]
    fn test_held_buttons_move() {
        let c = controls();
        let s = c.sample(&[tap(c.left, false)], false);
        assert_eq!(s, TouchSample { left: true, ..Default::default() });

        let s = c.sample(&[tap(c.left, false), tap(c.right, false)], false);
        assert!(s.left && s.right);
    }

    #[test]
    fn test_jump_needs_a_new_touch() {
        let c = controls();
        assert!(c.sample(&[tap(c.jump, true)], false).jump);
        assert!(!c.sample(&[tap(c.jump, false)], false).jump);
    }

    #[test]
    fn test_restart_only_on_terminal_screens() {
        let c = controls();
        let press = tap(c.restart, true);
        assert!(c.sample(&[press], true).restart);
        assert!(!c.sample(&[press], false).restart);

        // Movement buttons are hidden while the restart button shows
        let s = c.sample(&[tap(c.left, false)], true);
        assert!(!s.left);
    }

    #[test]
    fn test_restart_sits_just_below_canvas() {
        for c in [controls(), TouchControls::layout(800.0, 620.0, 600.0)] {
            assert_eq!(c.restart.y, c.strip.y + BUTTON_GAP);
            assert_eq!(c.restart.center_x(), c.strip.center_x());
            assert!(c.restart.bottom() <= c.strip.bottom());
        }
        // Right under a 600px canvas, not halfway down the strip
        assert_eq!(controls().restart.y, 608.0);
    }

    #[test]
    fn test_touch_on_canvas_is_ignored() {
        let c = controls();
        let s = c.sample(&[TouchPoint { x: 100.0, y: 100.0, just_started: true }], false);
        assert_eq!(s, TouchSample::default());
    }

    #[test]
    fn test_draw_swaps_buttons_on_terminal() {
        let c = controls();
        let mut list = DrawList::new();
        c.draw(&mut list, &[], false);
        assert!(list.has_text("Jump"));
        assert!(!list.has_text("Restart"));

        let mut list = DrawList::new();
        c.draw(&mut list, &[], true);
        assert!(list.has_text("Restart"));
        assert!(!list.has_text("Jump"));
    }
}
