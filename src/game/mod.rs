//! Game simulation
//!
//! The per-frame loop and everything it owns:
//! - Entities: hero, enemies, stars, goal (plain data)
//! - GameState: the single aggregate a session mutates
//! - Session: advances the state from an input snapshot and draws it
//! - Animation: frame-counter driven phases, no stored timers
//!
//! Drawing goes through the [`crate::ui::Renderer`] trait so the whole loop
//! runs headless in tests.

pub mod animation;
pub mod collision;
pub mod entity;
pub mod particles;
pub mod renderer;
pub mod runtime;
pub mod world;

pub use runtime::{FrameReport, Session};
pub use world::Viewport;
