//! Collision tests between the hero and everything else
//!
//! Axis-aligned boxes only. Enemy contact is split into a horizontal and a
//! vertical test because a stomp only needs the horizontal one plus a narrow
//! band at the enemy's head.

use super::entity::{Enemy, Goal, Hero, Star, BODY_WIDTH, CHARACTER_SIZE, GOAL_SIZE, HERO_REACH, STAR_HITBOX};
use crate::ui::Rect;

/// Which axes the hero overlaps an enemy on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnemyContact {
    pub horizontal: bool,
    pub vertical: bool,
}

impl EnemyContact {
    /// Overlap on both axes
    pub fn full(&self) -> bool {
        self.horizontal && self.vertical
    }
}

/// Hero box used against stars and the goal
pub fn hero_reach_box(hero: &Hero) -> Rect {
    Rect::new(hero.x, hero.y, BODY_WIDTH, HERO_REACH)
}

pub fn star_box(star: &Star) -> Rect {
    Rect::new(star.x, star.y, STAR_HITBOX, STAR_HITBOX)
}

/// Goal box at its resting height (the bob is cosmetic)
pub fn goal_box(goal: &Goal) -> Rect {
    Rect::new(goal.x, goal.y, GOAL_SIZE, GOAL_SIZE)
}

pub fn touches_star(hero: &Hero, star: &Star) -> bool {
    hero_reach_box(hero).overlaps(&star_box(star))
}

pub fn touches_goal(hero: &Hero, goal: &Goal) -> bool {
    hero_reach_box(hero).overlaps(&goal_box(goal))
}

/// Per-axis overlap between the hero and an enemy
///
/// Horizontal uses the narrow body width and is strict; vertical uses the
/// full sprite height and counts touching edges.
pub fn enemy_contact(hero: &Hero, enemy: &Enemy) -> EnemyContact {
    EnemyContact {
        horizontal: hero.x + BODY_WIDTH > enemy.x && hero.x < enemy.x + BODY_WIDTH,
        vertical: hero.bottom() >= enemy.y && hero.y <= enemy.y + CHARACTER_SIZE,
    }
}

/// Landing on an enemy's head while falling
///
/// The hero's feet must sit within `tolerance` pixels below the enemy's top
/// edge, and the enemy must not already be mid-defeat.
pub fn is_stomp(hero: &Hero, enemy: &Enemy, contact: EnemyContact, tolerance: f32) -> bool {
    let feet = hero.bottom();
    contact.horizontal
        && feet >= enemy.y
        && feet <= enemy.y + tolerance
        && hero.vy > 0.0
        && !enemy.is_defeating()
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUND: f32 = 380.0;

    fn hero_at(x: f32, y: f32, vy: f32) -> Hero {
        Hero { x, y, vy, airborne: vy != 0.0, glitch_timer: 0 }
    }

    #[test]
    fn test_star_pickup_box() {
        let star = Star::new(200.0, 330.0);
        // Standing on the ground under a star does not reach it
        assert!(!touches_star(&hero_at(190.0, GROUND, 0.0), &star));
        // Jumping into it does
        assert!(touches_star(&hero_at(190.0, 320.0, -5.0), &star));
        // Just past the right edge
        assert!(!touches_star(&hero_at(220.0, 320.0, -5.0), &star));
    }

    #[test]
    fn test_goal_touch_on_ground() {
        let goal = Goal { x: 1000.0, y: GROUND };
        assert!(touches_goal(&hero_at(965.0, GROUND, 0.0), &goal));
        assert!(!touches_goal(&hero_at(960.0, GROUND, 0.0), &goal));
    }

    #[test]
    fn test_side_contact() {
        let enemy = Enemy::new(400.0, GROUND, 1);
        let contact = enemy_contact(&hero_at(370.0, GROUND, 0.0), &enemy);
        assert!(contact.full());

        let apart = enemy_contact(&hero_at(360.0, GROUND, 0.0), &enemy);
        assert!(!apart.horizontal);
    }

    #[test]
    fn test_stomp_window() {
        let enemy = Enemy::new(400.0, GROUND, 1);

        // Feet one pixel into the enemy's head while falling
        let hero = hero_at(400.0, GROUND - 49.0, 1.0);
        let contact = enemy_contact(&hero, &enemy);
        assert!(is_stomp(&hero, &enemy, contact, 10.0));

        // Rising through the enemy is not a stomp
        let rising = hero_at(400.0, GROUND - 49.0, -1.0);
        assert!(!is_stomp(&rising, &enemy, enemy_contact(&rising, &enemy), 10.0));

        // Too deep
        let deep = hero_at(400.0, GROUND - 30.0, 3.0);
        assert!(!is_stomp(&deep, &enemy, enemy_contact(&deep, &enemy), 10.0));
    }

    #[test]
    fn test_no_stomp_on_defeated_enemy() {
        let mut enemy = Enemy::new(400.0, GROUND, 1);
        enemy.defeat_countdown = 5;
        let hero = hero_at(400.0, GROUND - 49.0, 1.0);
        assert!(!is_stomp(&hero, &enemy, enemy_contact(&hero, &enemy), 10.0));
    }
}
