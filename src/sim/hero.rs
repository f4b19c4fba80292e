//! The player-controlled hero

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::anim::{AnimationClock, HERO_ANIM};
use super::body::KinematicBody;
use super::level::Platform;
use crate::consts::*;
use crate::settings::WorldConfig;

/// Direction the hero sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Held keys and edges the hero reacts to on one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeroControls {
    pub left: bool,
    pub right: bool,
    /// Jump pressed this tick (edge, not held)
    pub jump: bool,
}

/// The hero entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub body: KinematicBody,
    pub health: i32,
    pub max_health: i32,
    pub facing: Facing,
    /// Airborne from a jump (cosmetic)
    pub is_jumping: bool,
    /// Horizontal input held (cosmetic)
    pub is_running: bool,
    #[serde(skip)]
    pub anim: AnimationClock,
}

impl Hero {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: KinematicBody::new(pos, HERO_SIZE, HERO_SIZE),
            health: HERO_MAX_HEALTH,
            max_health: HERO_MAX_HEALTH,
            facing: Facing::Right,
            is_jumping: false,
            is_running: false,
            anim: AnimationClock::default(),
        }
    }

    /// Hero at the standard spawn point for this world
    pub fn spawn(config: &WorldConfig) -> Self {
        Self::new(Vec2::new(
            HERO_SPAWN_X,
            config.viewport_height - HERO_SPAWN_INSET,
        ))
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.body.pos.x
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Subtract damage, flooring health at zero
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).clamp(0, self.max_health);
    }

    /// Advance one tick. Returns true when a jump was launched.
    pub fn update(
        &mut self,
        controls: HeroControls,
        config: &WorldConfig,
        platforms: &[Platform],
    ) -> bool {
        // Left is tested first, so holding both keys moves left
        if controls.left {
            self.body.vel.x = -config.hero_speed;
            self.facing = Facing::Left;
            self.is_running = true;
        } else if controls.right {
            self.body.vel.x = config.hero_speed;
            self.facing = Facing::Right;
            self.is_running = true;
        } else {
            self.body.vel.x = 0.0;
            self.is_running = false;
        }

        let jumped = controls.jump && self.body.grounded;
        if jumped {
            self.body.vel.y = config.jump_velocity;
            self.body.grounded = false;
            self.is_jumping = true;
        }

        self.body.integrate(
            config.gravity,
            config.ground_y(),
            platforms.iter().map(|p| &p.rect),
            config.world_width,
        );

        if self.body.grounded {
            self.is_jumping = false;
        }

        self.anim.advance(HERO_ANIM);
        jumped
    }
}
