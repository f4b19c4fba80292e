//! Demo autopilot
//!
//! Produces inputs for attract mode and the headless runner: run right, hop
//! over anything hostile ahead, restart once the session ends.

use super::state::{Session, SessionPhase};
use super::tick::{MenuAction, TickInput};

/// Jump when an enemy's left edge is this close ahead of the hero's right edge
const JUMP_LOOKAHEAD: f32 = 90.0;

/// Choose the input for the next tick
pub fn drive(session: &Session, restart_when_done: bool) -> TickInput {
    match session.phase {
        SessionPhase::Menu => TickInput {
            menu: Some(MenuAction::Start),
            ..Default::default()
        },
        SessionPhase::GameOver | SessionPhase::Victory => TickInput {
            restart: restart_when_done,
            ..Default::default()
        },
        SessionPhase::Playing => {
            let hero = &session.hero.body;
            let front = hero.pos.x + hero.width();
            let threat_ahead = session.enemies.iter().any(|enemy| {
                let gap = enemy.body.pos.x - front;
                (0.0..JUMP_LOOKAHEAD).contains(&gap)
            });
            TickInput {
                right: true,
                jump: hero.grounded && threat_ahead,
                ..Default::default()
            }
        }
    }
}
