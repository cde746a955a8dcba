//! Game entities
//!
//! Plain data. Positions are canvas pixels in world space (x grows right,
//! y grows down); the renderer subtracts the scroll offset.

/// Drawn size of the hero and of each enemy
pub const CHARACTER_SIZE: f32 = 50.0;

/// Width of the hero's and enemies' hit boxes (narrower than the sprite)
pub const BODY_WIDTH: f32 = 40.0;

/// Hero hit box height used against stars and the goal
pub const HERO_REACH: f32 = 40.0;

/// Star radius when drawn
pub const STAR_RADIUS: f32 = 10.0;

/// Star hit box side, anchored at the star's position
pub const STAR_HITBOX: f32 = 20.0;

/// Drawn size and hit box side of the friend to rescue
pub const GOAL_SIZE: f32 = 40.0;

/// Which screen the session is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Phase {
    /// Won and Lost never change again until a restart
    pub fn is_terminal(self) -> bool {
        !matches!(self, Phase::Playing)
    }
}

/// The player character
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hero {
    pub x: f32,
    pub y: f32,
    /// Vertical velocity, positive is falling
    pub vy: f32,
    pub airborne: bool,
    /// Frames left of the post-hit stun
    pub glitch_timer: u32,
}

impl Hero {
    pub fn new(x: f32, ground: f32) -> Self {
        Self {
            x,
            y: ground,
            vy: 0.0,
            airborne: false,
            glitch_timer: 0,
        }
    }

    /// Y of the hero's feet
    pub fn bottom(&self) -> f32 {
        self.y + CHARACTER_SIZE
    }

    pub fn is_glitching(&self) -> bool {
        self.glitch_timer > 0
    }
}

/// A salamander that walks the level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    /// +1 walking right, -1 walking left
    pub direction: f32,
    /// Cleared for good once the defeat animation ends
    pub active: bool,
    /// Frames left of the defeat flicker; zero when not defeated
    pub defeat_countdown: u32,
}

impl Enemy {
    pub fn new(x: f32, ground: f32, direction: i8) -> Self {
        Self {
            x,
            y: ground,
            direction: if direction < 0 { -1.0 } else { 1.0 },
            active: true,
            defeat_countdown: 0,
        }
    }

    /// Stomped and still flickering
    pub fn is_defeating(&self) -> bool {
        self.defeat_countdown > 0
    }
}

/// A collectible star
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub collected: bool,
}

impl Star {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, collected: false }
    }
}

/// The friend waiting at the end of the level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Goal {
    pub x: f32,
    /// Resting y; the drawn position bobs around it
    pub y: f32,
}
