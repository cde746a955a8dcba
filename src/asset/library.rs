//! Sprite library
//!
//! Resolves every [`SpriteId`] to a GPU texture before the first frame runs.
//! Files that fail to load are replaced by generated placeholders, so a
//! lookup can never miss.

use macroquad::prelude::{load_texture, FilterMode, Texture2D};

use super::sprite::{placeholder_pixels, AssetError, SpriteId};

/// Directory where sprite images are stored
pub const SPRITES_DIR: &str = "assets/sprites";

/// All game sprites, indexed by [`SpriteId`]
pub struct SpriteSheet {
    textures: Vec<Texture2D>,
    /// Sprites that fell back to a placeholder
    missing: Vec<SpriteId>,
}

impl SpriteSheet {
    /// Load every sprite from `dir`, substituting placeholders for failures
    pub async fn load(dir: &str) -> Self {
        let mut textures = Vec::with_capacity(SpriteId::ALL.len());
        let mut missing = Vec::new();

        for id in SpriteId::ALL {
            let texture = match load_sprite(dir, id).await {
                Ok(texture) => texture,
                Err(e) => {
                    log::warn!("{}, using placeholder", e);
                    missing.push(id);
                    placeholder_texture(id)
                }
            };
            textures.push(texture);
        }

        log::info!(
            "Loaded {} sprites ({} placeholders)",
            textures.len() - missing.len(),
            missing.len()
        );
        Self { textures, missing }
    }

    /// Texture for a sprite
    pub fn get(&self, id: SpriteId) -> &Texture2D {
        &self.textures[id.index()]
    }

    /// Sprites that are being drawn with placeholder art
    pub fn missing(&self) -> &[SpriteId] {
        &self.missing
    }
}

async fn load_sprite(dir: &str, id: SpriteId) -> Result<Texture2D, AssetError> {
    let path = format!("{}/{}", dir, id.file_name());
    let texture = load_texture(&path).await.map_err(|e| AssetError::Texture {
        path: path.clone(),
        message: e.to_string(),
    })?;
    texture.set_filter(FilterMode::Linear);
    Ok(texture)
}

fn placeholder_texture(id: SpriteId) -> Texture2D {
    let (w, h) = id.placeholder_size();
    let texture = Texture2D::from_rgba8(w, h, &placeholder_pixels(id));
    texture.set_filter(FilterMode::Nearest);
    texture
}
