//! Colors and font sizes shared by the game screens and touch controls

use macroquad::prelude::Color;

// =============================================================================
// Canvas
// =============================================================================

/// Cleared behind the background image every frame
pub const CLEAR_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Primary text on the canvas
pub const TEXT_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Text drawn on dark panels
pub const TEXT_LIGHT: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Collectible star fill
pub const STAR_COLOR: Color = Color::new(1.0, 1.0, 0.0, 1.0);

// =============================================================================
// HUD
// =============================================================================

/// Backing plate behind the health bar
pub const HEALTH_BACKING: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Health above half
pub const HEALTH_GOOD: Color = Color::new(0.298, 0.686, 0.314, 1.0); // #4caf50

/// Health between a fifth and a half
pub const HEALTH_WARN: Color = Color::new(1.0, 0.596, 0.0, 1.0); // #ff9800

/// Health at or below a fifth
pub const HEALTH_LOW: Color = Color::new(0.957, 0.263, 0.212, 1.0); // #f44336

/// Health bar outline
pub const HEALTH_OUTLINE: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Mission banner panel
pub const BANNER_BG: Color = Color::new(0.0, 0.0, 0.0, 0.7);

// =============================================================================
// Victory tableau
// =============================================================================

/// Speech bubble fill
pub const BUBBLE_FILL: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Speech bubble outline
pub const BUBBLE_OUTLINE: Color = Color::new(0.5, 0.5, 0.5, 1.0);

// =============================================================================
// Touch controls
// =============================================================================

/// Strip under the canvas that hosts the touch buttons
pub const CONTROL_STRIP_BG: Color = Color::new(0.11, 0.11, 0.13, 1.0);

/// Button face
pub const BUTTON_BG: Color = Color::new(0.235, 0.314, 0.392, 0.9);

/// Button face while held
pub const BUTTON_ACTIVE: Color = Color::new(0.35, 0.5, 0.65, 0.95);

/// Button border
pub const BUTTON_BORDER: Color = Color::new(0.8, 0.8, 0.85, 1.0);

// =============================================================================
// Font Sizes
// =============================================================================

/// Terminal-screen banners ("GAME OVER", "SAVED!!")
pub const FONT_SIZE_BANNER: f32 = 48.0;

/// Final score under a banner
pub const FONT_SIZE_SCORE: f32 = 24.0;

/// HUD score, mission text and speech bubble
pub const FONT_SIZE_HUD: f32 = 20.0;

/// Label inside the health bar
pub const FONT_SIZE_SMALL: f32 = 14.0;

/// Touch button captions
pub const FONT_SIZE_BUTTON: f32 = 28.0;
