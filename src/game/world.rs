//! Game state aggregate
//!
//! Everything one session mutates lives in [`GameState`]. Restarting is
//! just building a new one.

use rand::Rng;

use super::entity::{Enemy, Goal, Hero, Phase, Star};
use super::particles::ConfettiField;
use crate::config::{GameConfig, GoalPolicy, ScrollPolicy};

/// Canvas size, fixed for the whole session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub hero: Hero,
    pub enemies: Vec<Enemy>,
    pub stars: Vec<Star>,
    pub goal: Goal,
    pub confetti: ConfettiField,

    pub score: u32,
    pub health: u32,
    pub max_health: u32,
    /// Frames since start, drives every animation
    pub frame: u64,
    /// Frames left to show the mission banner
    pub mission_timer: u32,
    pub phase: Phase,

    pub viewport: Viewport,
    /// Y of the hero and enemies when standing
    pub ground: f32,
}

impl GameState {
    /// Fresh level for a canvas
    pub fn new(config: &GameConfig, viewport: Viewport, rng: &mut impl Rng) -> Self {
        let ground = viewport.height - config.physics.ground_offset;
        let star_y = viewport.height - config.level.star_offset;

        Self {
            hero: Hero::new(config.level.hero_start_x, ground),
            enemies: config
                .level
                .enemies
                .iter()
                .map(|spawn| Enemy::new(spawn.x, ground, spawn.direction))
                .collect(),
            stars: config.level.star_xs.iter().map(|&x| Star::new(x, star_y)).collect(),
            goal: Goal { x: config.level.goal_x, y: ground },
            confetti: ConfettiField::spawn(
                config.presentation.confetti_count,
                viewport.width,
                viewport.height,
                rng,
            ),
            score: 0,
            health: config.rules.max_health,
            max_health: config.rules.max_health,
            frame: 0,
            mission_timer: config.presentation.mission_frames,
            phase: Phase::Playing,
            viewport,
            ground,
        }
    }

    /// Horizontal translation for world-space drawing
    ///
    /// Keeps the hero a third of the way across the canvas. Derived from
    /// the hero's position on every call, never stored.
    pub fn scroll_offset(&self, policy: ScrollPolicy) -> f32 {
        let offset = self.hero.x - self.viewport.width / 3.0;
        match policy {
            ScrollPolicy::Unclamped => offset,
            ScrollPolicy::ClampAtZero => offset.max(0.0),
        }
    }

    /// Every enemy has finished its defeat animation
    pub fn enemies_cleared(&self) -> bool {
        self.enemies.iter().all(|e| !e.active)
    }

    /// Whether the goal is drawn and can be touched
    pub fn goal_reachable(&self, policy: GoalPolicy) -> bool {
        match policy {
            GoalPolicy::AlwaysReachable => true,
            GoalPolicy::RequiresClearedEnemies => self.enemies_cleared(),
        }
    }

    /// Health as a share of the maximum, 0.0 to 1.0
    pub fn health_fraction(&self) -> f32 {
        if self.max_health == 0 {
            return 0.0;
        }
        (self.health.min(self.max_health) as f32) / self.max_health as f32
    }

    /// Health as a whole percentage of the maximum, rounded down
    pub fn health_percent(&self) -> u32 {
        health_percent(self.health, self.max_health)
    }

    pub fn stars_collected(&self) -> usize {
        self.stars.iter().filter(|s| s.collected).count()
    }
}

/// Whole percentage of `max_health`, rounded down, in 0..=100
pub fn health_percent(health: u32, max_health: u32) -> u32 {
    if max_health == 0 {
        return 0;
    }
    (u64::from(health.min(max_health)) * 100 / u64::from(max_health)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn state() -> GameState {
        let mut rng = StdRng::seed_from_u64(3);
        GameState::new(&GameConfig::default(), Viewport::new(1200.0, 480.0), &mut rng)
    }

    #[test]
    fn test_initial_layout() {
        let s = state();
        assert_eq!(s.ground, 380.0);
        assert_eq!(s.hero, Hero::new(50.0, 380.0));
        assert_eq!(s.enemies.len(), 3);
        assert_eq!(s.enemies[1].x, 600.0);
        assert_eq!(s.enemies[1].direction, -1.0);
        assert!(s.enemies.iter().all(|e| e.active && e.y == 380.0));
        assert_eq!(s.stars.iter().map(|st| st.x).collect::<Vec<_>>(), vec![200.0, 500.0, 700.0]);
        assert!(s.stars.iter().all(|st| st.y == 330.0 && !st.collected));
        assert_eq!(s.goal, Goal { x: 1000.0, y: 380.0 });
        assert_eq!(s.health, 100);
        assert_eq!(s.score, 0);
        assert_eq!(s.mission_timer, 180);
        assert_eq!(s.confetti.particles.len(), 100);
        assert_eq!(s.phase, Phase::Playing);
    }

    #[test]
    fn test_scroll_offset_follows_hero() {
        let mut s = state();
        assert_eq!(s.scroll_offset(ScrollPolicy::Unclamped), -350.0);
        assert_eq!(s.scroll_offset(ScrollPolicy::ClampAtZero), 0.0);

        s.hero.x = 900.0;
        assert_eq!(s.scroll_offset(ScrollPolicy::Unclamped), 500.0);
        assert_eq!(s.scroll_offset(ScrollPolicy::ClampAtZero), 500.0);
    }

    #[test]
    fn test_goal_gate() {
        let mut s = state();
        assert!(s.goal_reachable(GoalPolicy::AlwaysReachable));
        assert!(!s.goal_reachable(GoalPolicy::RequiresClearedEnemies));

        for e in &mut s.enemies {
            e.active = false;
        }
        assert!(s.goal_reachable(GoalPolicy::RequiresClearedEnemies));
    }

    #[test]
    fn test_health_fraction() {
        let mut s = state();
        assert_eq!(s.health_fraction(), 1.0);
        s.health = 25;
        assert_eq!(s.health_fraction(), 0.25);
    }

    #[test]
    fn test_health_percent_is_exact() {
        for h in 0..=100 {
            assert_eq!(health_percent(h, 100), h);
        }
        assert_eq!(health_percent(1, 3), 33);
        assert_eq!(health_percent(500, 100), 100);
        assert_eq!(health_percent(u32::MAX, u32::MAX), 100);
        assert_eq!(health_percent(7, 0), 0);
    }
}
