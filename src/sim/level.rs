//! Static level geometry: platforms, coins and enemy spawn points

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::anim::{AnimationClock, COIN_ANIM};
use super::body::Rect;
use super::enemy::{Enemy, EnemyKind};
use crate::consts::*;
use crate::settings::WorldConfig;

pub const PLATFORM_WIDTH: f32 = 150.0;
pub const PLATFORM_HEIGHT: f32 = 20.0;

/// Platform columns: (x, height above the bottom of the viewport)
const PLATFORM_LAYOUT: [(f32, f32); 8] = [
    (200.0, 200.0),
    (400.0, 300.0),
    (600.0, 250.0),
    (800.0, 350.0),
    (1000.0, 200.0),
    (1200.0, 300.0),
    (1400.0, 250.0),
    (1600.0, 350.0),
];

/// Enemy spawn columns, standing on the ground line
const ENEMY_LAYOUT: [(f32, EnemyKind); 8] = [
    (300.0, EnemyKind::Basic),
    (500.0, EnemyKind::Basic),
    (700.0, EnemyKind::Strong),
    (900.0, EnemyKind::Basic),
    (1100.0, EnemyKind::Basic),
    (1300.0, EnemyKind::Strong),
    (1500.0, EnemyKind::Basic),
    (1700.0, EnemyKind::Basic),
];

/// Coins float this far right of and above their platform's top-left corner
const COIN_OFFSET: Vec2 = Vec2::new(50.0, -20.0);

/// A static, immutable platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
        }
    }
}

/// A collectible coin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub rect: Rect,
    /// Monotonic within a session: never reverts to false
    pub collected: bool,
    #[serde(skip)]
    pub anim: AnimationClock,
}

impl Coin {
    pub fn new(pos: Vec2) -> Self {
        let size = COIN_SIZE as f32;
        Self {
            rect: Rect::new(pos.x, pos.y, size, size),
            collected: false,
            anim: AnimationClock::default(),
        }
    }

    /// Mark as collected. Returns true only on the first call.
    pub fn collect(&mut self) -> bool {
        let newly = !self.collected;
        self.collected = true;
        newly
    }

    /// Advance the spin animation (only while still in the world)
    pub fn animate(&mut self) {
        if !self.collected {
            self.anim.advance(COIN_ANIM);
        }
    }
}

/// Platform registry and pickup set for one session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Level {
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
}

impl Level {
    /// The standard level layout
    pub fn standard(config: &WorldConfig) -> Self {
        let platforms: Vec<Platform> = PLATFORM_LAYOUT
            .iter()
            .map(|&(x, rise)| {
                Platform::new(x, config.viewport_height - rise, PLATFORM_WIDTH, PLATFORM_HEIGHT)
            })
            .collect();

        let coins = platforms
            .iter()
            .map(|p| Coin::new(Vec2::new(p.rect.x, p.rect.y) + COIN_OFFSET))
            .collect();

        Self { platforms, coins }
    }

    /// Coins still in the world
    pub fn remaining_coins(&self) -> usize {
        self.coins.iter().filter(|c| !c.collected).count()
    }
}

/// The standard enemy roster, standing on the ground line
pub fn spawn_enemies(config: &WorldConfig) -> Vec<Enemy> {
    let y = config.ground_y() - ENEMY_SIZE as f32;
    ENEMY_LAYOUT
        .iter()
        .map(|&(x, kind)| Enemy::new(Vec2::new(x, y), kind, config.enemy_speed))
        .collect()
}
