//! Session state and core simulation types
//!
//! Everything one playthrough mutates lives in [`Session`]; there are no
//! globals. Presentation-only fields are skipped on serialization.

use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::hero::Hero;
use super::level::{Level, spawn_enemies};
use crate::settings::WorldConfig;

/// Top-level session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Title menu, world frozen
    #[default]
    Menu,
    /// Active gameplay, the only phase in which the world advances
    Playing,
    /// Hero health reached zero
    GameOver,
    /// Hero reached the right edge of the world
    Victory,
}

impl SessionPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionPhase::GameOver | SessionPhase::Victory)
    }
}

/// Discrete things that happened during a tick
///
/// The simulation never performs I/O; audio and logging react to these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new session entered Playing (from Menu or a restart)
    SessionStarted,
    /// Hero left the ground
    Jumped,
    /// A coin was picked up; carries the new score
    CoinCollected { score: u32 },
    /// Hero overlapped an enemy; carries remaining health
    HeroHit { health: i32 },
    /// Hero reached the goal
    VictoryReached { score: u32 },
    /// Hero ran out of health
    Defeated { score: u32 },
    /// Menu asked to flip background music
    MusicToggled,
    /// Menu asked to flip sound effects
    SoundToggled,
    /// Player asked to quit from the menu
    ExitRequested,
}

/// Complete state of one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// World parameters, fixed for the lifetime of the session
    pub config: WorldConfig,
    pub phase: SessionPhase,
    /// Non-decreasing while Playing; kept through GameOver/Victory
    pub score: u32,
    /// Current level number (1-based)
    pub level: u32,
    pub hero: Hero,
    pub enemies: Vec<Enemy>,
    /// Platform registry and pickup set
    pub layout: Level,
    /// Camera scroll offset (derived from the hero every Playing tick)
    pub camera_x: f32,
    /// Playing ticks since the last reset
    pub time_ticks: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}

impl Session {
    /// Create a session sitting at the menu
    pub fn new(config: WorldConfig) -> Self {
        Self {
            hero: Hero::spawn(&config),
            enemies: spawn_enemies(&config),
            layout: Level::standard(&config),
            config,
            phase: SessionPhase::Menu,
            score: 0,
            level: 1,
            camera_x: 0.0,
            time_ticks: 0,
        }
    }

    /// Rebuild every entity collection and zero the counters
    pub fn reset(&mut self) {
        self.hero = Hero::spawn(&self.config);
        self.enemies = spawn_enemies(&self.config);
        self.layout = Level::standard(&self.config);
        self.score = 0;
        self.level = 1;
        self.camera_x = 0.0;
        self.time_ticks = 0;
    }

    /// Reset and enter Playing
    pub fn start(&mut self) {
        let from = self.phase;
        self.reset();
        self.phase = SessionPhase::Playing;
        log::info!("Session started (from {:?})", from);
    }
}
