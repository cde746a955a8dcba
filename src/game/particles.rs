//! Victory confetti
//!
//! A fixed batch of square particles allocated when the level starts. They
//! are only animated and drawn once the player wins, falling forever and
//! wrapping back to the top edge.

use macroquad::color::hsl_to_rgb;
use macroquad::prelude::Color;
use rand::Rng;

/// A single confetti square
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Confetti {
    pub x: f32,
    pub y: f32,
    /// Side length in pixels
    pub size: f32,
    /// Pixels fallen per frame
    pub speed: f32,
    pub color: Color,
}

/// All confetti for one session
#[derive(Debug, Clone, Default)]
pub struct ConfettiField {
    pub particles: Vec<Confetti>,
}

impl ConfettiField {
    /// Scatter `count` particles across the canvas width, staggered above
    /// the top edge so they rain in over time
    pub fn spawn(count: usize, width: f32, height: f32, rng: &mut impl Rng) -> Self {
        let particles = (0..count)
            .map(|_| Confetti {
                x: rng.gen_range(0.0..width.max(1.0)),
                y: -rng.gen_range(0.0..height.max(1.0)),
                size: rng.gen_range(4.0..10.0),
                speed: rng.gen_range(1.0..3.0),
                color: hsl_to_rgb(rng.gen_range(0.0..1.0), 1.0, 0.5),
            })
            .collect();
        Self { particles }
    }

    /// Advance one frame; anything past the bottom edge restarts at the top
    pub fn update(&mut self, height: f32) {
        for p in &mut self.particles {
            p.y += p.speed;
            if p.y > height {
                p.y = 0.0;
            }
        }
    }
}
