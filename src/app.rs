//! Application state
//!
//! Glues the window to the game: polls input, handles restart requests,
//! advances the session and draws the touch controls under the canvas.

use macroquad::prelude::{get_time, screen_height, screen_width};

use crate::asset::SpriteSheet;
use crate::config::{FpsLimit, GameConfig};
use crate::game::{FrameReport, Session, Viewport};
use crate::input::{InputState, TouchControls};
use crate::ui::MacroquadRenderer;

/// Main application state
pub struct AppState {
    pub session: Session,
    pub input: InputState,
    pub sprites: SpriteSheet,
    pub fps_limit: FpsLimit,
}

impl AppState {
    pub fn new(config: GameConfig, viewport: Viewport, sprites: SpriteSheet, seed: u64) -> Self {
        let fps_limit = config.presentation.fps_limit;
        Self {
            session: Session::start(config, viewport, seed),
            input: InputState::new(),
            sprites,
            fps_limit,
        }
    }

    /// Touch button layout for the current window size
    pub fn touch_controls(&self) -> TouchControls {
        let canvas_height = self.session.state().viewport.height;
        TouchControls::layout(screen_width(), screen_height(), canvas_height)
    }

    /// One display refresh: input, restart, simulate, draw
    pub fn run_frame(&mut self) -> FrameReport {
        let touch = self.touch_controls();
        let terminal = self.session.state().phase.is_terminal();
        let input = self.input.poll(&touch, terminal);

        if terminal && input.restart_pressed {
            self.session.restart();
        }

        let mut renderer = MacroquadRenderer::new(&self.sprites);
        let report = self.session.frame(&input, &mut renderer);
        touch.draw(&mut renderer, self.input.points(), report.phase.is_terminal());
        report
    }
}

/// Frame time the host should hold each frame to, if any
///
/// The browser already paces frames through requestAnimationFrame, and a
/// spin-wait there would block the page, so WASM never holds.
pub fn pacing_target(fps_limit: FpsLimit) -> Option<f64> {
    if cfg!(target_arch = "wasm32") {
        None
    } else {
        fps_limit.frame_time()
    }
}

/// Hold the frame until the configured frame time has passed
pub fn pace_frame(fps_limit: FpsLimit, frame_start: f64) {
    let Some(target_frame_time) = pacing_target(fps_limit) else { return };

    // Sleep for bulk, then spin-wait for precision
    #[cfg(not(target_arch = "wasm32"))]
    {
        let spin_margin = 0.002; // 2ms
        while get_time() - frame_start + spin_margin < target_frame_time {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        while get_time() - frame_start < target_frame_time {
            std::hint::spin_loop();
        }
    }
    #[cfg(target_arch = "wasm32")]
    let _ = (target_frame_time, frame_start);
}
