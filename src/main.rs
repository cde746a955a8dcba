//! Axolotl Rescue: a small side-scrolling platformer
//!
//! Run right, stomp the salamanders, grab the stars and reach Axey.
//! The window is split in two: the game canvas on top and a strip of touch
//! controls underneath.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod asset;
mod config;
mod game;
mod input;
mod ui;

use app::{pace_frame, AppState};
use asset::{SpriteSheet, SPRITES_DIR};
use config::GameConfig;
use game::Viewport;
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Axolotl Rescue v{}", VERSION),
        window_width: 960,
        window_height: 800,
        window_resizable: true,
        // Start windowed on all platforms (WASM: browser handles sizing)
        #[cfg(not(target_arch = "wasm32"))]
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    {
        crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();
    }

    log::info!("Axolotl Rescue v{}", VERSION);

    let config = GameConfig::load().await;

    // The canvas size is captured once; the game never reflows
    let viewport = Viewport::new(
        screen_width(),
        screen_height() * config.presentation.canvas_height_fraction,
    );

    let sprites = SpriteSheet::load(SPRITES_DIR).await;
    if !sprites.missing().is_empty() {
        log::warn!("Placeholder art for {:?}, see {}/README.md", sprites.missing(), SPRITES_DIR);
    }
    let seed = (macroquad::miniquad::date::now() * 1000.0) as u64;

    let mut app = AppState::new(config, viewport, sprites, seed);

    loop {
        let frame_start = get_time();
        let report = app.run_frame();
        if report.transitioned && report.phase.is_terminal() {
            log::info!("{:?}: press R, Enter, Start or tap Restart to play again", report.phase);
        }
        pace_frame(app.fps_limit, frame_start);
        next_frame().await;
    }
}
