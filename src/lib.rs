//! Platformer Adventure - a side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, enemy AI, session state)
//! - `audio`: Event-to-audio dispatch behind a pluggable sink
//! - `settings`: Audio preferences and world configuration
//! - `ui`: Menu layout hit-testing
//! - `frame`: Camera-relative draw data for a renderer

pub mod audio;
pub mod error;
pub mod frame;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::{AudioError, SettingsError};
pub use settings::{Settings, WorldConfig};

/// Game configuration constants
pub mod consts {
    /// Viewport dimensions
    pub const VIEWPORT_WIDTH: f32 = 1000.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;
    /// Horizontal extent of the scrolling world
    pub const WORLD_WIDTH: f32 = 2000.0;
    /// Ground line sits this far above the bottom of the viewport
    pub const GROUND_INSET: f32 = 100.0;

    /// Downward acceleration, units per tick²
    pub const GRAVITY: f32 = 0.8;
    /// Launch velocity of a jump (negative is up)
    pub const JUMP_VELOCITY: f32 = -15.0;
    pub const HERO_SPEED: f32 = 5.0;
    pub const ENEMY_SPEED: f32 = 2.0;

    /// Hero defaults
    pub const HERO_SIZE: u32 = 32;
    pub const HERO_MAX_HEALTH: i32 = 100;
    pub const HERO_SPAWN_X: f32 = 50.0;
    /// Spawn height above the bottom of the viewport
    pub const HERO_SPAWN_INSET: f32 = 150.0;

    /// Enemy defaults
    pub const ENEMY_SIZE: u32 = 24;
    /// Half-width of the patrol range around the spawn point
    pub const PATROL_HALF_RANGE: f32 = 50.0;
    /// Horizontal distance at which an enemy starts chasing
    pub const ATTACK_RANGE: f32 = 100.0;
    /// Ticks of chase asserted on each (re)entry into Chasing
    pub const ATTACK_DURATION_TICKS: u32 = 60;
    /// Chase speed multiplier over the base enemy speed
    pub const CHASE_SPEED_FACTOR: f32 = 1.5;

    /// Pickups and damage
    pub const COIN_SIZE: u32 = 16;
    pub const COIN_REWARD: u32 = 10;
    pub const ENEMY_DAMAGE: i32 = 20;

    /// Victory once the hero is this close to the right edge of the world
    pub const VICTORY_MARGIN: f32 = 50.0;
}
