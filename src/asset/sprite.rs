//! Sprite identifiers and placeholder artwork

/// Every image the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    HeroWalk1,
    HeroWalk2,
    HeroWalk3,
    Enemy,
    Goal,
    Background,
    Clouds,
}

/// Errors raised while resolving sprites
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to load sprite {path}: {message}")]
    Texture { path: String, message: String },
}

impl SpriteId {
    pub const ALL: [SpriteId; 7] = [
        SpriteId::HeroWalk1,
        SpriteId::HeroWalk2,
        SpriteId::HeroWalk3,
        SpriteId::Enemy,
        SpriteId::Goal,
        SpriteId::Background,
        SpriteId::Clouds,
    ];

    /// Walk-cycle sprite for animation frame 0, 1 or 2 (wraps)
    pub fn hero_walk(frame: usize) -> Self {
        match frame % 3 {
            0 => SpriteId::HeroWalk1,
            1 => SpriteId::HeroWalk2,
            _ => SpriteId::HeroWalk3,
        }
    }

    /// Position in [`SpriteId::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// File name under the sprite directory
    pub fn file_name(self) -> &'static str {
        match self {
            SpriteId::HeroWalk1 => "axolotl_defender_1.png",
            SpriteId::HeroWalk2 => "axolotl_defender_2.png",
            SpriteId::HeroWalk3 => "axolotl_defender_3.png",
            SpriteId::Enemy => "salamander.png",
            SpriteId::Goal => "axolotl_yellow.png",
            SpriteId::Background => "background.png",
            SpriteId::Clouds => "clouds.png",
        }
    }

    /// Size of the generated stand-in image
    pub fn placeholder_size(self) -> (u16, u16) {
        match self {
            SpriteId::Background => (64, 64),
            SpriteId::Clouds => (128, 32),
            _ => (32, 32),
        }
    }
}

/// RGBA8 pixels for a stand-in image, used when the real file is missing
///
/// Characters are a filled ellipse in a per-sprite color on a transparent
/// background; walk frames shift a highlight so the cycle stays visible.
pub fn placeholder_pixels(id: SpriteId) -> Vec<u8> {
    let (w, h) = id.placeholder_size();
    let (w, h) = (w as usize, h as usize);
    let mut pixels = vec![0u8; w * h * 4];

    for y in 0..h {
        for x in 0..w {
            let u = (x as f32 + 0.5) / w as f32;
            let v = (y as f32 + 0.5) / h as f32;
            let rgba = placeholder_texel(id, u, v);
            let i = (y * w + x) * 4;
            pixels[i..i + 4].copy_from_slice(&rgba);
        }
    }
    pixels
}

fn placeholder_texel(id: SpriteId, u: f32, v: f32) -> [u8; 4] {
    let in_body = {
        let dx = (u - 0.5) / 0.45;
        let dy = (v - 0.55) / 0.4;
        dx * dx + dy * dy <= 1.0
    };

    match id {
        SpriteId::Background => {
            if v > 0.85 {
                [86, 160, 70, 255]
            } else {
                let t = v / 0.85;
                [
                    (135.0 + 60.0 * t) as u8,
                    (206.0 + 30.0 * t) as u8,
                    (250.0 - 10.0 * t) as u8,
                    255,
                ]
            }
        }
        SpriteId::Clouds => {
            let puff = |cx: f32| {
                let dx = (u - cx) / 0.08;
                let dy = (v - 0.5) / 0.35;
                dx * dx + dy * dy <= 1.0
            };
            if puff(0.15) || puff(0.22) || puff(0.55) || puff(0.62) || puff(0.85) {
                [255, 255, 255, 220]
            } else {
                [0, 0, 0, 0]
            }
        }
        SpriteId::Enemy if in_body => [214, 96, 40, 255],
        SpriteId::Goal if in_body => [250, 210, 60, 255],
        SpriteId::HeroWalk1 | SpriteId::HeroWalk2 | SpriteId::HeroWalk3 if in_body => {
            let stripe = match id {
                SpriteId::HeroWalk1 => 0.3,
                SpriteId::HeroWalk2 => 0.5,
                _ => 0.7,
            };
            if (u - stripe).abs() < 0.06 {
                [255, 235, 240, 255]
            } else {
                [240, 150, 180, 255]
            }
        }
        _ => [0, 0, 0, 0],
    }
}
