//! Game session
//!
//! Owns the config, the RNG and the [`GameState`], and advances the state
//! one display frame at a time. The host calls [`Session::frame`] once per
//! refresh with that frame's input snapshot.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::collision::{enemy_contact, is_stomp, touches_goal, touches_star};
use super::entity::Phase;
use super::renderer::draw_scene;
use super::world::{GameState, Viewport};
use crate::config::{DamagePolicy, EnemyMotion, GameConfig};
use crate::input::InputSnapshot;
use crate::ui::Renderer;

/// What happened during one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub phase: Phase,
    /// The phase changed during this frame
    pub transitioned: bool,
}

pub struct Session {
    config: GameConfig,
    viewport: Viewport,
    rng: StdRng,
    state: GameState,
}

impl Session {
    /// Build the level and get ready for the first frame
    pub fn start(config: GameConfig, viewport: Viewport, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let state = GameState::new(&config, viewport, &mut rng);
        log::info!(
            "Session started on a {}x{} canvas ({} enemies, {} stars)",
            viewport.width,
            viewport.height,
            state.enemies.len(),
            state.stars.len()
        );
        Self { config, viewport, rng, state }
    }

    /// Throw away all state and begin again from the initial layout
    pub fn restart(&mut self) {
        log::info!(
            "Restarting after {:?} with score {}",
            self.state.phase,
            self.state.score
        );
        self.state = GameState::new(&self.config, self.viewport, &mut self.rng);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Advance one frame and draw it
    pub fn frame(&mut self, input: &InputSnapshot, renderer: &mut impl Renderer) -> FrameReport {
        let report = self.update(input);
        self.draw(renderer);
        report
    }

    /// Draw the current state without advancing it
    pub fn draw(&self, renderer: &mut impl Renderer) {
        draw_scene(&self.state, &self.config, renderer);
    }

    /// Advance the simulation by one frame
    pub fn update(&mut self, input: &InputSnapshot) -> FrameReport {
        let before = self.state.phase;
        self.state.frame += 1;

        match self.state.phase {
            Phase::Won => self.state.confetti.update(self.viewport.height),
            Phase::Lost => {}
            Phase::Playing => self.step_playing(input),
        }

        let phase = self.state.phase;
        if phase != before {
            log::info!(
                "{:?} -> {:?} at frame {} (score {}, health {}, stars {}/{})",
                before,
                phase,
                self.state.frame,
                self.state.score,
                self.state.health,
                self.state.stars_collected(),
                self.state.stars.len()
            );
        }

        FrameReport {
            phase,
            transitioned: phase != before,
        }
    }

    fn step_playing(&mut self, input: &InputSnapshot) {
        self.move_hero(input);
        self.apply_gravity();
        self.try_jump(input);
        self.collect_stars();
        self.update_enemies();
        self.check_goal();
        self.check_health();

        self.state.mission_timer = self.state.mission_timer.saturating_sub(1);
    }

    fn move_hero(&mut self, input: &InputSnapshot) {
        let step = self.config.physics.move_step;
        let hero = &mut self.state.hero;

        if hero.is_glitching() {
            hero.glitch_timer -= 1;
            return;
        }
        if input.move_left {
            hero.x -= step;
        }
        if input.move_right {
            hero.x += step;
        }
    }

    fn apply_gravity(&mut self) {
        let ground = self.state.ground;
        let hero = &mut self.state.hero;

        hero.vy += self.config.physics.gravity;
        hero.y += hero.vy;
        if hero.y > ground {
            hero.y = ground;
            hero.vy = 0.0;
            hero.airborne = false;
        }
    }

    fn try_jump(&mut self, input: &InputSnapshot) {
        let hero = &mut self.state.hero;
        if input.jump_pressed && !hero.airborne {
            hero.vy = self.config.physics.jump_power;
            hero.airborne = true;
        }
    }

    fn collect_stars(&mut self) {
        let hero = self.state.hero;
        let bonus = self.config.rules.star_bonus;

        for star in self.state.stars.iter_mut().filter(|s| !s.collected) {
            if touches_star(&hero, star) {
                star.collected = true;
                self.state.score = self.state.score.saturating_add(bonus);
                log::debug!("Star at x={} collected", star.x);
            }
        }
    }

    fn update_enemies(&mut self) {
        let physics = &self.config.physics;
        let rules = &self.config.rules;
        let enemy_cfg = &self.config.enemy;
        let policies = self.config.policies;
        let state = &mut self.state;

        for enemy in state.enemies.iter_mut().filter(|e| e.active) {
            match policies.enemy_motion {
                EnemyMotion::Patrol => {
                    enemy.x += enemy.direction * enemy_cfg.speed;
                    if enemy.x < enemy_cfg.patrol_min_x || enemy.x > enemy_cfg.patrol_max_x {
                        enemy.direction = -enemy.direction;
                    }
                }
                EnemyMotion::Chase => {
                    let dx = state.hero.x - enemy.x;
                    if dx != 0.0 {
                        enemy.direction = dx.signum();
                        enemy.x += dx.signum() * enemy_cfg.speed.min(dx.abs());
                    }
                }
            }

            let contact = enemy_contact(&state.hero, enemy);

            if is_stomp(&state.hero, enemy, contact, physics.stomp_tolerance) {
                enemy.defeat_countdown = rules.defeat_frames.max(1);
                state.hero.vy = physics.jump_power / physics.bounce_divisor;
                state.score = state.score.saturating_add(rules.stomp_bonus);
                state.health = state.health.saturating_add(rules.stomp_heal).min(state.max_health);
                log::debug!("Stomped enemy at x={:.0}", enemy.x);
            }

            let defeating = enemy.is_defeating();
            if defeating {
                enemy.defeat_countdown -= 1;
                if enemy.defeat_countdown == 0 {
                    enemy.active = false;
                }
            }

            if contact.full() && !defeating {
                let can_hurt = match policies.contact_damage {
                    DamagePolicy::PerFrame => true,
                    DamagePolicy::PerContact => !state.hero.is_glitching(),
                };
                if can_hurt {
                    state.health = state.health.saturating_sub(rules.contact_damage);
                    state.hero.glitch_timer = rules.glitch_frames;
                    log::debug!("Hero hit, health now {}", state.health);
                }
            }
        }
    }

    fn check_goal(&mut self) {
        let state = &mut self.state;
        if state.goal_reachable(self.config.policies.goal) && touches_goal(&state.hero, &state.goal) {
            state.phase = Phase::Won;
        }
    }

    fn check_health(&mut self) {
        let state = &mut self.state;
        if state.phase == Phase::Playing && state.health == 0 {
            state.phase = Phase::Lost;
        }
    }
}
