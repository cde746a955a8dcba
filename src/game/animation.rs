//! Frame-counter driven animation
//!
//! Every animation phase is a pure function of the frame counter, so there
//! are no timers to keep in sync.

/// Frames each hero walk sprite stays on screen
pub const WALK_FRAME_LENGTH: u64 = 10;

/// Sprites in the hero walk cycle
pub const WALK_FRAMES: u64 = 3;

/// Pixels the cloud strip drifts per frame
pub const CLOUD_SPEED: f64 = 0.3;

/// Walk-cycle index (0, 1 or 2) for a frame
pub fn hero_walk_frame(frame: u64) -> usize {
    ((frame % (WALK_FRAME_LENGTH * WALK_FRAMES)) / WALK_FRAME_LENGTH) as usize
}

/// Vertical bob of the goal actor, in pixels
pub fn goal_bob(frame: u64) -> f32 {
    ((frame as f64 / 20.0).sin() * 4.0) as f32
}

/// Whether a defeated enemy is drawn on this step of its countdown
pub fn defeat_flicker_visible(countdown: u32) -> bool {
    countdown % 4 < 2
}

/// Screen x of the first cloud strip; the second follows one width later
pub fn cloud_offset(frame: u64, width: f32) -> f32 {
    if width <= 0.0 {
        return 0.0;
    }
    -((frame as f64 * CLOUD_SPEED) % width as f64) as f32
}
