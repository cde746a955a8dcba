//! Sprite assets
//!
//! The game needs seven images (three hero walk frames, the salamander
//! enemy, the friend to rescue, the backdrop and a cloud strip). They live
//! in `assets/sprites/` and are resolved once, before the first frame.

mod library;
mod sprite;

pub use library::{SpriteSheet, SPRITES_DIR};
pub use sprite::SpriteId;
