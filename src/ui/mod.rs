//! Drawing primitives shared by the game screens and touch controls
//!
//! - [`Rect`] for layout and hit testing
//! - [`Renderer`] as the seam between game code and macroquad
//! - theme colors and font sizes

mod canvas;
mod rect;
pub mod theme;

#[cfg(test)]
pub use canvas::{DrawCommand, DrawList};
pub use canvas::{MacroquadRenderer, Renderer};
pub use rect::*;
