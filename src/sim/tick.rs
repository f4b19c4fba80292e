//! Fixed-tick simulation step
//!
//! One call to [`tick`] is one frame: commands for the current phase are
//! applied first, then the world advances if (and only if) the session is
//! Playing.

use super::camera::camera_offset;
use super::hero::HeroControls;
use super::state::{GameEvent, Session, SessionPhase};
use crate::consts::*;

/// Menu commands, already resolved from a click by the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    ToggleMusic,
    ToggleSound,
    Exit,
}

/// Input for a single tick
///
/// `left`/`right` are held state; everything else is an edge consumed by
/// this tick only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Jump pressed this tick
    pub jump: bool,
    /// Back/menu key (Escape)
    pub back: bool,
    /// Restart key (R)
    pub restart: bool,
    /// Menu button clicked this tick
    pub menu: Option<MenuAction>,
}

impl TickInput {
    fn controls(&self) -> HeroControls {
        HeroControls {
            left: self.left,
            right: self.right,
            jump: self.jump,
        }
    }
}

/// Advance the session by one tick, returning what happened
pub fn tick(session: &mut Session, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    apply_commands(session, input, &mut events);

    if session.phase == SessionPhase::Playing {
        step_world(session, input, &mut events);
    }

    events
}

/// Phase transitions driven by explicit player commands.
///
/// A command the current phase does not define is ignored.
fn apply_commands(session: &mut Session, input: &TickInput, events: &mut Vec<GameEvent>) {
    match session.phase {
        SessionPhase::Menu => {
            if let Some(action) = input.menu {
                match action {
                    MenuAction::Start => {
                        session.start();
                        events.push(GameEvent::SessionStarted);
                    }
                    MenuAction::ToggleMusic => events.push(GameEvent::MusicToggled),
                    MenuAction::ToggleSound => events.push(GameEvent::SoundToggled),
                    MenuAction::Exit => events.push(GameEvent::ExitRequested),
                }
            } else if input.back {
                events.push(GameEvent::ExitRequested);
            }
        }
        SessionPhase::Playing => {
            if input.back {
                session.phase = SessionPhase::Menu;
                log::info!("Back to menu (score {})", session.score);
            }
        }
        SessionPhase::GameOver | SessionPhase::Victory => {
            if input.restart {
                session.start();
                events.push(GameEvent::SessionStarted);
            }
        }
    }
}

/// One Playing tick: movement, camera, pickups, damage, win/lose
fn step_world(session: &mut Session, input: &TickInput, events: &mut Vec<GameEvent>) {
    session.time_ticks += 1;

    let config = &session.config;
    let platforms = &session.layout.platforms;

    if session.hero.update(input.controls(), config, platforms) {
        events.push(GameEvent::Jumped);
    }

    let hero_x = session.hero.x();
    for enemy in &mut session.enemies {
        enemy.update(hero_x, config, platforms);
    }
    for coin in &mut session.layout.coins {
        coin.animate();
    }

    session.camera_x = camera_offset(hero_x, config.viewport_width, config.world_width);

    let hero_box = session.hero.body.aabb();

    for coin in &mut session.layout.coins {
        if !coin.collected && hero_box.overlaps(&coin.rect) && coin.collect() {
            session.score += COIN_REWARD;
            events.push(GameEvent::CoinCollected {
                score: session.score,
            });
        }
    }

    // No invulnerability window: every tick of overlap hurts
    for enemy in &session.enemies {
        if hero_box.overlaps(&enemy.body.aabb()) {
            session.hero.take_damage(ENEMY_DAMAGE);
            events.push(GameEvent::HeroHit {
                health: session.hero.health,
            });
        }
    }

    // Victory is checked last, so it wins a tie with death on the same tick
    let won = session.hero.x() >= config.victory_x();
    if won {
        session.phase = SessionPhase::Victory;
        log::info!("Victory at tick {} with score {}", session.time_ticks, session.score);
        events.push(GameEvent::VictoryReached {
            score: session.score,
        });
    } else if session.hero.is_dead() {
        session.phase = SessionPhase::GameOver;
        log::info!("Game over at tick {} with score {}", session.time_ticks, session.score);
        events.push(GameEvent::Defeated {
            score: session.score,
        });
    }
}
