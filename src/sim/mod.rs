//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only
//! - Stable iteration order (registry order for platforms, enemies, coins)
//! - No rendering, audio or platform dependencies

pub mod anim;
pub mod autopilot;
pub mod body;
pub mod camera;
pub mod enemy;
pub mod hero;
pub mod level;
pub mod state;
pub mod tick;

pub use anim::AnimationClock;
pub use body::{Contact, KinematicBody, Rect};
pub use camera::{camera_offset, to_screen_x};
pub use enemy::{Enemy, EnemyBehavior, EnemyKind};
pub use hero::{Facing, Hero, HeroControls};
pub use level::{Coin, Level, Platform};
pub use state::{GameEvent, Session, SessionPhase};
pub use tick::{MenuAction, TickInput, tick};
