//! Patrolling enemies and their chase behavior
//!
//! Each enemy is a two-state machine. Proximity to the hero is the only
//! transition predicate, re-evaluated every tick, so an enemy sitting right
//! at the attack range flips between states from one tick to the next.
//!
//! `attack_timer` is reset to the full duration on every tick the hero is
//! in range and counts down while chasing. Because of the reset it never
//! runs out during a chase; it is tracked but never decides a transition.
//!
//! Patrol reversal only checks which side of the bounds the enemy is on. A
//! chase that ends past a bound leaves the enemy there, flipping direction
//! every tick and jittering in place until the hero comes back in range.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::anim::{AnimationClock, ENEMY_ANIM};
use super::body::KinematicBody;
use super::level::Platform;
use crate::consts::*;
use crate::settings::WorldConfig;

/// Enemy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Basic,
    Strong,
}

impl EnemyKind {
    pub fn initial_health(&self) -> i32 {
        match self {
            EnemyKind::Basic => 30,
            EnemyKind::Strong => 50,
        }
    }
}

/// Behavior state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnemyBehavior {
    #[default]
    Patrolling,
    Chasing,
}

/// A hostile entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub body: KinematicBody,
    pub kind: EnemyKind,
    pub health: i32,
    /// Patrol bounds, fixed at spawn
    pub patrol_start: f32,
    pub patrol_end: f32,
    pub behavior: EnemyBehavior,
    pub attack_timer: u32,
    #[serde(skip)]
    pub anim: AnimationClock,
}

impl Enemy {
    pub fn new(pos: Vec2, kind: EnemyKind, speed: f32) -> Self {
        let mut body = KinematicBody::new(pos, ENEMY_SIZE, ENEMY_SIZE);
        body.vel.x = -speed;
        Self {
            body,
            kind,
            health: kind.initial_health(),
            patrol_start: pos.x - PATROL_HALF_RANGE,
            patrol_end: pos.x + PATROL_HALF_RANGE,
            behavior: EnemyBehavior::Patrolling,
            attack_timer: 0,
            anim: AnimationClock::default(),
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.body.pos.x
    }

    pub fn is_chasing(&self) -> bool {
        self.behavior == EnemyBehavior::Chasing
    }

    /// Re-evaluate the behavior state from the hero's horizontal position
    pub fn think(&mut self, hero_x: f32) {
        let distance = (self.x() - hero_x).abs();
        if distance < ATTACK_RANGE {
            if self.behavior != EnemyBehavior::Chasing {
                log::trace!("enemy at {:.1} starts chasing", self.x());
            }
            self.behavior = EnemyBehavior::Chasing;
            self.attack_timer = ATTACK_DURATION_TICKS;
        } else {
            self.behavior = EnemyBehavior::Patrolling;
        }
    }

    /// Set horizontal velocity for this tick from the behavior state
    pub fn steer(&mut self, hero_x: f32, base_speed: f32) {
        if self.is_chasing() && self.attack_timer > 0 {
            let chase_speed = base_speed * CHASE_SPEED_FACTOR;
            self.body.vel.x = if hero_x < self.x() {
                -chase_speed
            } else {
                chase_speed
            };
            self.attack_timer -= 1;
        } else if self.x() <= self.patrol_start || self.x() >= self.patrol_end {
            self.body.vel.x = -self.body.vel.x;
        }
    }

    /// Advance one tick
    pub fn update(&mut self, hero_x: f32, config: &WorldConfig, platforms: &[Platform]) {
        self.think(hero_x);
        self.steer(hero_x, config.enemy_speed);
        self.body.integrate(
            config.gravity,
            config.ground_y(),
            platforms.iter().map(|p| &p.rect),
            config.world_width,
        );
        self.anim.advance(ENEMY_ANIM);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enemy_at(x: f32, config: &WorldConfig) -> Enemy {
        let y = config.ground_y() - ENEMY_SIZE as f32;
        Enemy::new(Vec2::new(x, y), EnemyKind::Basic, config.enemy_speed)
    }

    #[test]
    fn test_kind_fixes_health() {
        assert_eq!(EnemyKind::Basic.initial_health(), 30);
        assert_eq!(EnemyKind::Strong.initial_health(), 50);
    }

    #[test]
    fn test_patrol_oscillates_between_bounds() {
        let config = WorldConfig::default();
        let mut enemy = enemy_at(300.0, &config);
        let far_hero = 1900.0;

        // 300 -> 250 at -2 per tick
        for _ in 0..25 {
            enemy.update(far_hero, &config, &[]);
        }
        assert_eq!(enemy.x(), 250.0);
        assert_eq!(enemy.body.vel.x, -2.0);

        // At the bound the velocity flips before integrating
        enemy.update(far_hero, &config, &[]);
        assert_eq!(enemy.body.vel.x, 2.0);
        assert_eq!(enemy.x(), 252.0);

        for _ in 0..49 {
            enemy.update(far_hero, &config, &[]);
        }
        assert_eq!(enemy.x(), 350.0);
        enemy.update(far_hero, &config, &[]);
        assert_eq!(enemy.body.vel.x, -2.0);
        assert_eq!(enemy.x(), 348.0);
        assert_eq!(enemy.behavior, EnemyBehavior::Patrolling);
    }

    #[test]
    fn test_chase_toward_hero() {
        let config = WorldConfig::default();
        let mut enemy = enemy_at(300.0, &config);

        enemy.update(250.0, &config, &[]);
        assert!(enemy.is_chasing());
        assert_eq!(enemy.body.vel.x, -3.0);
        assert_eq!(enemy.x(), 297.0);
        assert_eq!(enemy.attack_timer, ATTACK_DURATION_TICKS - 1);

        enemy.update(390.0, &config, &[]);
        assert_eq!(enemy.body.vel.x, 3.0);
        // Re-asserted every tick in range
        assert_eq!(enemy.attack_timer, ATTACK_DURATION_TICKS - 1);
    }

    #[test]
    fn test_state_follows_distance_only() {
        let config = WorldConfig::default();
        let mut enemy = enemy_at(300.0, &config);

        enemy.think(200.5);
        assert!(enemy.is_chasing());
        enemy.think(200.0);
        assert!(!enemy.is_chasing(), "exactly at range is not chasing");
        enemy.think(399.0);
        assert!(enemy.is_chasing());
        // Timer is still running, yet leaving range drops the chase at once
        assert!(enemy.attack_timer > 0);
        enemy.think(400.0);
        assert_eq!(enemy.behavior, EnemyBehavior::Patrolling);
    }

    #[test]
    fn test_patrol_bounds_never_move() {
        let config = WorldConfig::default();
        let mut enemy = enemy_at(300.0, &config);
        for tick in 0..300 {
            let hero_x = if tick % 50 < 25 { 320.0 } else { 1500.0 };
            enemy.update(hero_x, &config, &[]);
        }
        assert_eq!(enemy.patrol_start, 250.0);
        assert_eq!(enemy.patrol_end, 350.0);
    }

    #[test]
    fn test_enemy_stays_on_ground() {
        let config = WorldConfig::default();
        let mut enemy = enemy_at(300.0, &config);
        for _ in 0..10 {
            enemy.update(1900.0, &config, &[]);
            assert!(enemy.body.grounded);
            assert_eq!(enemy.body.bottom(), config.ground_y());
        }
    }

    #[test]
    fn test_enemy_lands_on_platform() {
        let config = WorldConfig::default();
        let platforms = [Platform::new(200.0, 400.0, 150.0, 20.0)];
        let mut enemy = Enemy::new(Vec2::new(260.0, 350.0), EnemyKind::Basic, config.enemy_speed);

        for _ in 0..20 {
            enemy.update(1900.0, &config, &platforms);
        }
        assert_eq!(enemy.body.vel.y, 0.0);
        assert!(enemy.body.grounded);
        assert_eq!(enemy.body.bottom(), 400.0);
        assert_eq!(enemy.x(), 220.0);
    }

    #[test]
    fn test_enemy_pushed_out_of_platform_side() {
        let config = WorldConfig::default();
        // Low ledge reaching down into the enemy's height band
        let platforms = [Platform::new(330.0, 470.0, 150.0, 20.0)];
        let mut enemy = enemy_at(300.0, &config);
        enemy.body.vel.x = config.enemy_speed;

        for _ in 0..10 {
            enemy.update(1900.0, &config, &platforms);
            assert!(enemy.body.aabb().right() <= 330.0);
        }
        assert_eq!(enemy.x(), 306.0);
        assert_eq!(enemy.body.vel.x, 2.0);
        assert!(enemy.body.grounded);
    }

    #[test]
    fn test_jitters_past_bound_after_chase() {
        let config = WorldConfig::default();
        let mut enemy = enemy_at(300.0, &config);

        // Drag it past patrol_end
        for _ in 0..27 {
            let hero_x = enemy.x() + 50.0;
            enemy.update(hero_x, &config, &[]);
        }
        assert_eq!(enemy.x(), 381.0);
        assert_eq!(enemy.body.vel.x, 3.0);

        let mut trail = Vec::new();
        for _ in 0..6 {
            enemy.update(1900.0, &config, &[]);
            assert_eq!(enemy.behavior, EnemyBehavior::Patrolling);
            trail.push((enemy.x(), enemy.body.vel.x));
        }
        assert_eq!(
            trail,
            [
                (378.0, -3.0),
                (381.0, 3.0),
                (378.0, -3.0),
                (381.0, 3.0),
                (378.0, -3.0),
                (381.0, 3.0),
            ]
        );
    }
}
