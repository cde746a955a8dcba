//! Scene drawing
//!
//! Turns a [`GameState`] into draw calls. Nothing here mutates state; the
//! session has already advanced the frame before this runs.

use super::animation::{cloud_offset, defeat_flicker_visible, goal_bob, hero_walk_frame};
use super::entity::{Phase, CHARACTER_SIZE, GOAL_SIZE, STAR_RADIUS};
use super::world::{health_percent, GameState};
use crate::asset::SpriteId;
use crate::config::GameConfig;
use crate::ui::theme::*;
use crate::ui::{Rect, Renderer};

/// Health bar geometry
const HEALTH_BAR_WIDTH: f32 = 200.0;
const HEALTH_BAR_HEIGHT: f32 = 20.0;
const HEALTH_BAR_TOP: f32 = 20.0;

/// Height of the cloud strip
const CLOUD_HEIGHT: f32 = 100.0;
const CLOUD_TOP: f32 = 30.0;

/// Side of the portraits on the victory screen
const PORTRAIT_SIZE: f32 = 100.0;

/// How far past either canvas edge the goal is still drawn
const GOAL_DRAW_MARGIN: f32 = 50.0;

/// Health bar fill color for a health value
pub fn health_color(health: u32, max_health: u32) -> macroquad::prelude::Color {
    let percent = health_percent(health, max_health);
    if percent > 50 {
        HEALTH_GOOD
    } else if percent > 20 {
        HEALTH_WARN
    } else {
        HEALTH_LOW
    }
}

/// Draw a complete frame for the current phase
pub fn draw_scene(state: &GameState, config: &GameConfig, r: &mut impl Renderer) {
    draw_backdrop(state, r);

    match state.phase {
        Phase::Playing => {
            draw_world(state, config, r);
            draw_hud(state, config, r);
        }
        Phase::Won => draw_win_screen(state, r),
        Phase::Lost => draw_lose_screen(state, r),
    }
}

// =============================================================================
// Backdrop
// =============================================================================

fn draw_backdrop(state: &GameState, r: &mut impl Renderer) {
    let w = state.viewport.width;
    let h = state.viewport.height;

    r.clear(CLEAR_COLOR);
    r.sprite(SpriteId::Background, Rect::screen(w, h), None);

    let cloud_x = cloud_offset(state.frame, w);
    r.sprite(SpriteId::Clouds, Rect::new(cloud_x, CLOUD_TOP, w, CLOUD_HEIGHT), None);
    r.sprite(SpriteId::Clouds, Rect::new(cloud_x + w, CLOUD_TOP, w, CLOUD_HEIGHT), None);
}

// =============================================================================
// Playing
// =============================================================================

fn draw_world(state: &GameState, config: &GameConfig, r: &mut impl Renderer) {
    let scroll = state.scroll_offset(config.policies.scroll);
    let hero = &state.hero;

    let walk = SpriteId::hero_walk(hero_walk_frame(state.frame));
    r.sprite(walk, Rect::new(hero.x - scroll, hero.y, CHARACTER_SIZE, CHARACTER_SIZE), None);

    for star in state.stars.iter().filter(|s| !s.collected) {
        r.fill_circle(star.x - scroll, star.y, STAR_RADIUS, STAR_COLOR);
    }

    for enemy in state.enemies.iter().filter(|e| e.active) {
        if enemy.is_defeating() && !defeat_flicker_visible(enemy.defeat_countdown) {
            continue;
        }
        r.sprite(
            SpriteId::Enemy,
            Rect::new(enemy.x - scroll, enemy.y, CHARACTER_SIZE, CHARACTER_SIZE),
            None,
        );
    }

    if state.goal_reachable(config.policies.goal) {
        let goal_x = state.goal.x - scroll;
        let goal_y = state.goal.y + goal_bob(state.frame);
        if goal_x > -GOAL_DRAW_MARGIN && goal_x < state.viewport.width + GOAL_DRAW_MARGIN {
            r.sprite(SpriteId::Goal, Rect::new(goal_x, goal_y, GOAL_SIZE, GOAL_SIZE), None);
        }
    }
}

fn draw_hud(state: &GameState, config: &GameConfig, r: &mut impl Renderer) {
    r.text(&format!("Score: {}", state.score), 10.0, 30.0, FONT_SIZE_HUD, TEXT_COLOR);

    let bar = Rect::new(
        state.viewport.width / 2.0 - HEALTH_BAR_WIDTH / 2.0,
        HEALTH_BAR_TOP,
        HEALTH_BAR_WIDTH,
        HEALTH_BAR_HEIGHT,
    );
    r.fill_rect(bar.pad(-2.0), HEALTH_BACKING);
    r.fill_rect(
        Rect::new(bar.x, bar.y, bar.w * state.health_fraction(), bar.h),
        health_color(state.health, state.max_health),
    );
    r.stroke_rect(bar, 1.0, HEALTH_OUTLINE);

    r.text(
        &format!("Health: {}%", state.health_percent()),
        bar.x + 50.0,
        bar.y + 15.0,
        FONT_SIZE_SMALL,
        TEXT_COLOR,
    );

    if state.mission_timer > 0 {
        let cx = state.viewport.width / 2.0;
        r.fill_rect(Rect::new(cx - 200.0, 60.0, 400.0, 50.0), BANNER_BG);
        r.text(
            &format!("Mission: {}", config.presentation.mission),
            cx - 180.0,
            90.0,
            FONT_SIZE_HUD,
            TEXT_LIGHT,
        );
    }
}

// =============================================================================
// Terminal screens
// =============================================================================

fn draw_win_screen(state: &GameState, r: &mut impl Renderer) {
    let cx = state.viewport.width / 2.0;
    let cy = state.viewport.height / 2.0;

    for p in &state.confetti.particles {
        r.fill_rect(Rect::new(p.x, p.y, p.size, p.size), p.color);
    }

    r.sprite(
        SpriteId::HeroWalk3,
        Rect::new(cx - 110.0, cy - 60.0, PORTRAIT_SIZE, PORTRAIT_SIZE),
        None,
    );
    r.sprite(
        SpriteId::Goal,
        Rect::new(cx + 10.0, cy - 60.0, PORTRAIT_SIZE, PORTRAIT_SIZE),
        None,
    );

    r.fill_ellipse(cx + 60.0, cy - 100.0, 90.0, 30.0, BUBBLE_FILL);
    r.stroke_ellipse(cx + 60.0, cy - 100.0, 90.0, 30.0, 1.0, BUBBLE_OUTLINE);
    r.text("Thank you!", cx - 5.0, cy - 93.0, FONT_SIZE_HUD, TEXT_COLOR);

    r.text("SAVED!!", cx - 100.0, cy + 80.0, FONT_SIZE_BANNER, TEXT_COLOR);
    r.text(
        &format!("Final Score: {}", state.score),
        cx - 80.0,
        cy + 120.0,
        FONT_SIZE_SCORE,
        TEXT_COLOR,
    );
}

fn draw_lose_screen(state: &GameState, r: &mut impl Renderer) {
    let cx = state.viewport.width / 2.0;
    let cy = state.viewport.height / 2.0;

    r.text("GAME OVER", cx - 140.0, cy, FONT_SIZE_BANNER, TEXT_COLOR);
    r.text(
        &format!("Final Score: {}", state.score),
        cx - 80.0,
        cy + 40.0,
        FONT_SIZE_SCORE,
        TEXT_COLOR,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GoalPolicy, ScrollPolicy};
    use crate::game::world::Viewport;
    use crate::ui::{DrawCommand, DrawList};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn state() -> GameState {
        let mut rng = StdRng::seed_from_u64(9);
        GameState::new(&GameConfig::default(), Viewport::new(1200.0, 480.0), &mut rng)
    }

    fn draw(state: &GameState, config: &GameConfig) -> DrawList {
        let mut list = DrawList::new();
        draw_scene(state, config, &mut list);
        list
    }

    #[test]
    fn test_health_color_bands() {
        assert_eq!(health_color(100, 100), HEALTH_GOOD);
        assert_eq!(health_color(51, 100), HEALTH_GOOD);
        assert_eq!(health_color(50, 100), HEALTH_WARN);
        assert_eq!(health_color(21, 100), HEALTH_WARN);
        assert_eq!(health_color(20, 100), HEALTH_LOW);
        assert_eq!(health_color(0, 100), HEALTH_LOW);
    }

    #[test]
    fn test_every_frame_starts_with_backdrop() {
        for phase in [Phase::Playing, Phase::Won, Phase::Lost] {
            let mut s = state();
            s.phase = phase;
            let list = draw(&s, &GameConfig::default());
            assert_eq!(list.commands[0], DrawCommand::Clear(CLEAR_COLOR));
            assert_eq!(list.sprites_of(SpriteId::Background), vec![Rect::new(0.0, 0.0, 1200.0, 480.0)]);
            assert_eq!(list.sprites_of(SpriteId::Clouds).len(), 2);
        }
    }

    #[test]
    fn test_clouds_scroll_slowly() {
        let mut s = state();
        s.frame = 10;
        let clouds = draw(&s, &GameConfig::default()).sprites_of(SpriteId::Clouds);
        assert!((clouds[0].x + 3.0).abs() < 1e-4);
        assert!((clouds[1].x - 1197.0).abs() < 1e-3);
    }

    #[test]
    fn test_playing_hud() {
        let mut s = state();
        s.score = 30;
        s.health = 40;
        let list = draw(&s, &GameConfig::default());

        assert!(list.has_text("Score: 30"));
        assert!(list.has_text("Health: 40%"));
        assert!(list.has_text("Mission: Find Axey"));

        let fill = list.commands.iter().find_map(|c| match c {
            DrawCommand::FillRect { rect, color } if *color == HEALTH_WARN => Some(*rect),
            _ => None,
        });
        assert_eq!(fill, Some(Rect::new(500.0, 20.0, 80.0, 20.0)));
    }

    #[test]
    fn test_health_label_matches_health() {
        let mut s = state();
        for h in 0..=100 {
            s.health = h;
            let list = draw(&s, &GameConfig::default());
            assert!(list.has_text(&format!("Health: {}%", h)), "health {}", h);
        }
    }

    #[test]
    fn test_mission_banner_expires() {
        let mut s = state();
        s.mission_timer = 0;
        assert!(!draw(&s, &GameConfig::default()).has_text("Mission"));
    }

    #[test]
    fn test_world_draws_relative_to_scroll() {
        let s = state();
        let list = draw(&s, &GameConfig::default());

        // Unclamped scroll keeps the hero a third of the way across
        let hero = list.sprites_of(SpriteId::HeroWalk1);
        assert_eq!(hero, vec![Rect::new(400.0, 380.0, 50.0, 50.0)]);
        assert_eq!(list.sprites_of(SpriteId::Enemy).len(), 3);
        assert_eq!(list.sprites_of(SpriteId::Enemy)[0].x, 750.0);

        let stars = list
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .count();
        assert_eq!(stars, 3);

        let mut config = GameConfig::default();
        config.policies.scroll = ScrollPolicy::ClampAtZero;
        let clamped = draw(&s, &config);
        assert_eq!(clamped.sprites_of(SpriteId::HeroWalk1)[0].x, 50.0);
    }

    #[test]
    fn test_collected_and_inactive_are_hidden() {
        let mut s = state();
        s.stars[0].collected = true;
        s.enemies[1].active = false;
        let list = draw(&s, &GameConfig::default());

        let stars = list
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .count();
        assert_eq!(stars, 2);
        assert_eq!(list.sprites_of(SpriteId::Enemy).len(), 2);
    }

    #[test]
    fn test_defeated_enemy_flickers() {
        let mut s = state();
        s.enemies.truncate(1);
        s.enemies[0].defeat_countdown = 13;
        assert_eq!(draw(&s, &GameConfig::default()).sprites_of(SpriteId::Enemy).len(), 1);
        s.enemies[0].defeat_countdown = 14;
        assert!(draw(&s, &GameConfig::default()).sprites_of(SpriteId::Enemy).is_empty());
    }

    #[test]
    fn test_goal_only_drawn_near_screen() {
        let mut s = state();
        // Goal at 1000, scroll -350: screen x 1350 is past the margin
        assert!(draw(&s, &GameConfig::default()).sprites_of(SpriteId::Goal).is_empty());

        s.hero.x = 700.0;
        let goal = draw(&s, &GameConfig::default()).sprites_of(SpriteId::Goal);
        assert_eq!(goal.len(), 1);
        assert_eq!(goal[0].x, 700.0);
    }

    #[test]
    fn test_gated_goal_hidden_until_cleared() {
        let mut config = GameConfig::default();
        config.policies.goal = GoalPolicy::RequiresClearedEnemies;
        let mut s = state();
        s.hero.x = 700.0;
        assert!(draw(&s, &config).sprites_of(SpriteId::Goal).is_empty());

        for e in &mut s.enemies {
            e.active = false;
        }
        assert_eq!(draw(&s, &config).sprites_of(SpriteId::Goal).len(), 1);
    }

    #[test]
    fn test_win_screen() {
        let mut s = state();
        s.phase = Phase::Won;
        s.score = 50;
        let list = draw(&s, &GameConfig::default());

        assert!(list.has_text("SAVED!!"));
        assert!(list.has_text("Thank you!"));
        assert!(list.has_text("Final Score: 50"));
        assert_eq!(list.sprites_of(SpriteId::HeroWalk3), vec![Rect::new(490.0, 180.0, 100.0, 100.0)]);
        assert_eq!(list.sprites_of(SpriteId::Goal), vec![Rect::new(610.0, 180.0, 100.0, 100.0)]);
        assert!(list.sprites_of(SpriteId::Enemy).is_empty());

        let confetti = list
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
            .count();
        assert_eq!(confetti, 100);
    }

    #[test]
    fn test_lose_screen() {
        let mut s = state();
        s.phase = Phase::Lost;
        s.score = 20;
        let list = draw(&s, &GameConfig::default());

        assert!(list.has_text("GAME OVER"));
        assert!(list.has_text("Final Score: 20"));
        assert!(!list.has_text("Health"));
        assert!(!list.commands.iter().any(|c| matches!(c, DrawCommand::FillRect { .. })));
    }
}
