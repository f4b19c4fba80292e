//! Presentation-only animation state
//!
//! Kept apart from the physics records; nothing in the simulation reads it.

use serde::{Deserialize, Serialize};

/// Hero cycles 4 frames, one every 8 ticks
pub const HERO_ANIM: FrameCycle = FrameCycle { period: 8, frames: 4 };
/// Enemies cycle 3 frames, one every 12 ticks
pub const ENEMY_ANIM: FrameCycle = FrameCycle { period: 12, frames: 3 };
/// Coins cycle 4 frames, one every 10 ticks
pub const COIN_ANIM: FrameCycle = FrameCycle { period: 10, frames: 4 };

/// Cadence of a looping sprite animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCycle {
    /// Ticks per frame
    pub period: u32,
    /// Frames in the loop
    pub frames: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationClock {
    pub timer: u32,
    pub frame: u32,
}

impl AnimationClock {
    /// Advance by one tick
    pub fn advance(&mut self, cycle: FrameCycle) {
        self.timer += 1;
        if self.timer >= cycle.period {
            self.timer = 0;
            self.frame = (self.frame + 1) % cycle.frames;
        }
    }
}
