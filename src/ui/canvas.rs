//! Drawing surface abstraction
//!
//! Game screens never call macroquad directly. They issue primitives
//! against a [`Renderer`]:
//! - [`MacroquadRenderer`] draws into the window
//! - [`DrawList`] records [`DrawCommand`]s so tests can inspect a frame

use macroquad::math::{Rect as MqRect, Vec2};
use macroquad::prelude::{
    clear_background, draw_circle, draw_ellipse, draw_ellipse_lines, draw_rectangle,
    draw_rectangle_lines, draw_text, draw_texture_ex, Color, DrawTextureParams, WHITE,
};

use super::Rect;
use crate::asset::{SpriteId, SpriteSheet};

/// Draw primitives the game screens need
pub trait Renderer {
    /// Fill the whole surface; called once per frame before other draws
    fn clear(&mut self, color: Color);

    /// Blit a sprite into `dest`, optionally cropping the source image to `clip`
    fn sprite(&mut self, sprite: SpriteId, dest: Rect, clip: Option<Rect>);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color);

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color);

    /// Axis-aligned ellipse centred at (x, y) with radii (rx, ry)
    fn fill_ellipse(&mut self, x: f32, y: f32, rx: f32, ry: f32, color: Color);

    fn stroke_ellipse(&mut self, x: f32, y: f32, rx: f32, ry: f32, thickness: f32, color: Color);

    /// Text with its baseline at `y`
    fn text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color);
}

// =============================================================================
// Window renderer
// =============================================================================

/// Renders straight into the macroquad window
pub struct MacroquadRenderer<'a> {
    sprites: &'a SpriteSheet,
}

impl<'a> MacroquadRenderer<'a> {
    pub fn new(sprites: &'a SpriteSheet) -> Self {
        Self { sprites }
    }
}

impl Renderer for MacroquadRenderer<'_> {
    fn clear(&mut self, color: Color) {
        clear_background(color);
    }

    fn sprite(&mut self, sprite: SpriteId, dest: Rect, clip: Option<Rect>) {
        let texture = self.sprites.get(sprite);
        draw_texture_ex(
            texture,
            dest.x,
            dest.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(Vec2::new(dest.w, dest.h)),
                source: clip.map(|c| MqRect::new(c.x, c.y, c.w, c.h)),
                ..Default::default()
            },
        );
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
    }

    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color) {
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, thickness, color);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        draw_circle(x, y, radius, color);
    }

    fn fill_ellipse(&mut self, x: f32, y: f32, rx: f32, ry: f32, color: Color) {
        draw_ellipse(x, y, rx, ry, 0.0, color);
    }

    fn stroke_ellipse(&mut self, x: f32, y: f32, rx: f32, ry: f32, thickness: f32, color: Color) {
        draw_ellipse_lines(x, y, rx, ry, 0.0, thickness, color);
    }

    fn text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color) {
        draw_text(text, x, y, size, color);
    }
}

// =============================================================================
// Recording renderer
// =============================================================================

/// One recorded draw call
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Sprite { sprite: SpriteId, dest: Rect, clip: Option<Rect> },
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, thickness: f32, color: Color },
    FillCircle { x: f32, y: f32, radius: f32, color: Color },
    FillEllipse { x: f32, y: f32, rx: f32, ry: f32, color: Color },
    StrokeEllipse { x: f32, y: f32, rx: f32, ry: f32, thickness: f32, color: Color },
    Text { text: String, x: f32, y: f32, size: f32, color: Color },
}

/// Renderer that keeps every call in order instead of drawing it
#[cfg(test)]
#[derive(Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

#[cfg(test)]
impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// All text strings drawn, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Destination rectangles of every blit of `id`
    pub fn sprites_of(&self, id: SpriteId) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Sprite { sprite, dest, .. } if *sprite == id => Some(*dest),
                _ => None,
            })
            .collect()
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }
}

#[cfg(test)]
impl Renderer for DrawList {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn sprite(&mut self, sprite: SpriteId, dest: Rect, clip: Option<Rect>) {
        self.commands.push(DrawCommand::Sprite { sprite, dest, clip });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color) {
        self.commands.push(DrawCommand::StrokeRect { rect, thickness, color });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle { x, y, radius, color });
    }

    fn fill_ellipse(&mut self, x: f32, y: f32, rx: f32, ry: f32, color: Color) {
        self.commands.push(DrawCommand::FillEllipse { x, y, rx, ry, color });
    }

    fn stroke_ellipse(&mut self, x: f32, y: f32, rx: f32, ry: f32, thickness: f32, color: Color) {
        self.commands.push(DrawCommand::StrokeEllipse { x, y, rx, ry, thickness, color });
    }

    fn text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), x, y, size, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_list_records_in_order() {
        let mut list = DrawList::new();
        list.clear(WHITE);
        list.sprite(SpriteId::Enemy, Rect::new(1.0, 2.0, 50.0, 50.0), None);
        list.text("Score: 10", 10.0, 30.0, 20.0, WHITE);

        assert_eq!(list.commands.len(), 3);
        assert_eq!(list.commands[0], DrawCommand::Clear(WHITE));
        assert_eq!(list.sprites_of(SpriteId::Enemy), vec![Rect::new(1.0, 2.0, 50.0, 50.0)]);
        assert!(list.sprites_of(SpriteId::Goal).is_empty());
        assert!(list.has_text("Score"));
        assert!(!list.has_text("GAME OVER"));
    }
}
