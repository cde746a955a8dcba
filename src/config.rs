//! Game configuration
//!
//! Every tunable number and every rule variant lives here, loaded from RON.
//! Lookup order:
//! 1. `<config dir>/axolotl-rescue/config.ron` (native only)
//! 2. `assets/config/game.ron`
//! 3. Built-in defaults
//!
//! Files may be partial; missing fields take their default value.

use serde::{Deserialize, Serialize};

/// Bundled config, loaded through macroquad's file API (works on WASM)
pub const CONFIG_ASSET_PATH: &str = "assets/config/game.ron";

/// Errors from loading or validating a config
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {message}")]
    Load { path: String, message: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid config: {0}")]
    Invalid(String),
}

// =============================================================================
// Rule variants
// =============================================================================

/// How enemy contact drains health
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DamagePolicy {
    /// One hit per contact; the glitch timer blocks further damage until it expires
    #[default]
    PerContact,
    /// Every frame of contact costs health, glitch timer or not
    PerFrame,
}

/// Whether the camera may scroll left of the world origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScrollPolicy {
    #[default]
    Unclamped,
    ClampAtZero,
}

/// When the friend at the end of the level can be reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GoalPolicy {
    #[default]
    AlwaysReachable,
    /// Hidden and untouchable until every enemy is defeated
    RequiresClearedEnemies,
}

/// How enemies move while active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnemyMotion {
    /// Walk back and forth between the patrol bounds
    #[default]
    Patrol,
    /// Walk toward the hero
    Chase,
}

/// FPS limit setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FpsLimit {
    Fps30,
    #[default]
    Fps60,
    /// As fast as the display refreshes
    Unlocked,
}

impl FpsLimit {
    /// Get the target frame time in seconds (None = unlocked)
    pub fn frame_time(&self) -> Option<f64> {
        match self {
            FpsLimit::Fps30 => Some(1.0 / 30.0),
            FpsLimit::Fps60 => Some(1.0 / 60.0),
            FpsLimit::Unlocked => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Policies {
    pub contact_damage: DamagePolicy,
    pub scroll: ScrollPolicy,
    pub goal: GoalPolicy,
    pub enemy_motion: EnemyMotion,
}

// =============================================================================
// Sections
// =============================================================================

/// Per-frame physics constants (pixels, pixels per frame)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    /// Vertical velocity applied on jump (negative is up)
    pub jump_power: f32,
    /// Horizontal step per frame while a direction is held
    pub move_step: f32,
    /// Ground line measured up from the bottom of the canvas
    pub ground_offset: f32,
    /// How far below an enemy's top edge the hero's feet may be for a stomp
    pub stomp_tolerance: f32,
    /// Stomp bounce is `jump_power / bounce_divisor`
    pub bounce_divisor: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 1.0,
            jump_power: -15.0,
            move_step: 5.0,
            ground_offset: 100.0,
            stomp_tolerance: 10.0,
            bounce_divisor: 1.5,
        }
    }
}

/// Scoring, health and timers (frames)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub max_health: u32,
    pub star_bonus: u32,
    pub stomp_bonus: u32,
    pub stomp_heal: u32,
    pub contact_damage: u32,
    pub glitch_frames: u32,
    pub defeat_frames: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_health: 100,
            star_bonus: 10,
            stomp_bonus: 20,
            stomp_heal: 20,
            contact_damage: 10,
            glitch_frames: 30,
            defeat_frames: 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub speed: f32,
    pub patrol_min_x: f32,
    pub patrol_max_x: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            speed: 1.2,
            patrol_min_x: 300.0,
            patrol_max_x: 800.0,
        }
    }
}

/// Where an enemy starts and which way it walks first
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub x: f32,
    pub direction: i8,
}

/// Level placement. Vertical positions derive from the canvas height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelLayout {
    pub hero_start_x: f32,
    pub enemies: Vec<EnemySpawn>,
    pub star_xs: Vec<f32>,
    /// Stars float this far above the bottom of the canvas
    pub star_offset: f32,
    pub goal_x: f32,
}

impl Default for LevelLayout {
    fn default() -> Self {
        Self {
            hero_start_x: 50.0,
            enemies: vec![
                EnemySpawn { x: 400.0, direction: 1 },
                EnemySpawn { x: 600.0, direction: -1 },
                EnemySpawn { x: 750.0, direction: 1 },
            ],
            star_xs: vec![200.0, 500.0, 700.0],
            star_offset: 150.0,
            goal_x: 1000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// Share of the window height used by the game canvas
    pub canvas_height_fraction: f32,
    pub mission: String,
    pub mission_frames: u32,
    pub confetti_count: usize,
    pub fps_limit: FpsLimit,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            canvas_height_fraction: 0.6,
            mission: "Find Axey".to_string(),
            mission_frames: 180,
            confetti_count: 100,
            fps_limit: FpsLimit::Fps60,
        }
    }
}

// =============================================================================
// Root
// =============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub physics: PhysicsConfig,
    pub rules: RulesConfig,
    pub enemy: EnemyConfig,
    pub level: LevelLayout,
    pub presentation: PresentationConfig,
    pub policies: Policies,
}

impl GameConfig {
    /// Parse and validate RON text
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig =
            ron::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file from disk
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_ron_str(&text)
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rules.max_health == 0 {
            return Err(ConfigError::Invalid("rules.max_health must be positive".into()));
        }
        let fraction = self.presentation.canvas_height_fraction;
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "presentation.canvas_height_fraction must be in (0, 1], got {}",
                fraction
            )));
        }
        if self.enemy.patrol_min_x >= self.enemy.patrol_max_x {
            return Err(ConfigError::Invalid(format!(
                "enemy patrol bounds are inverted: {} >= {}",
                self.enemy.patrol_min_x, self.enemy.patrol_max_x
            )));
        }
        if self.physics.bounce_divisor <= 0.0 {
            return Err(ConfigError::Invalid("physics.bounce_divisor must be positive".into()));
        }
        if let Some(spawn) = self.level.enemies.iter().find(|s| s.direction == 0) {
            return Err(ConfigError::Invalid(format!(
                "enemy at x={} has no walking direction",
                spawn.x
            )));
        }
        Ok(())
    }

    /// Resolve the config using the lookup order above
    ///
    /// Never fails: every problem is logged and the next source is tried.
    pub async fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(path) = user_config_path().filter(|p| p.exists()) {
                match Self::load_file(&path) {
                    Ok(config) => {
                        log::info!("Config loaded from {}", path.display());
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring {}: {}", path.display(), e),
                }
            }
        }

        match macroquad::file::load_string(CONFIG_ASSET_PATH).await {
            Ok(text) => match Self::from_ron_str(&text) {
                Ok(config) => {
                    log::info!("Config loaded from {}", CONFIG_ASSET_PATH);
                    return config;
                }
                Err(e) => log::warn!("Ignoring {}: {}", CONFIG_ASSET_PATH, e),
            },
            Err(e) => log::info!("No bundled config ({}), using defaults", e),
        }

        Self::default()
    }
}

/// Per-user override location
#[cfg(not(target_arch = "wasm32"))]
pub fn user_config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|dir| dir.join("axolotl-rescue").join("config.ron"))
}
