//! Render frame builder
//!
//! Copies what a renderer needs out of the session into screen space, so
//! the draw pass never touches simulation state.

use serde::Serialize;

use crate::consts::GROUND_INSET;
use crate::sim::{EnemyKind, Facing, Rect, Session, SessionPhase, to_screen_x};

/// What a sprite depicts
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SpriteKind {
    Ground,
    Platform,
    Coin,
    Enemy { kind: EnemyKind, chasing: bool },
    Hero { facing: Facing, jumping: bool, running: bool },
}

/// A rectangle to draw, already in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub rect: Rect,
    pub anim_frame: u32,
}

/// Heads-up display values
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hud {
    pub health: i32,
    pub max_health: i32,
    pub score: u32,
    pub level: u32,
    pub grounded: bool,
    pub jumping: bool,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub phase: SessionPhase,
    pub camera_x: f32,
    pub hud: Hud,
    /// Back-to-front draw order; empty outside Playing
    pub sprites: Vec<Sprite>,
}

/// Snapshot the session for drawing
pub fn build_frame(session: &Session) -> Frame {
    let hero = &session.hero;
    let hud = Hud {
        health: hero.health,
        max_health: hero.max_health,
        score: session.score,
        level: session.level,
        grounded: hero.body.grounded,
        jumping: hero.is_jumping,
    };

    let mut frame = Frame {
        phase: session.phase,
        camera_x: session.camera_x,
        hud,
        sprites: Vec::new(),
    };
    if session.phase != SessionPhase::Playing {
        return frame;
    }

    let camera_x = session.camera_x;
    let viewport_width = session.config.viewport_width;
    let mut push = |kind: SpriteKind, world: Rect, anim_frame: u32| {
        let rect = Rect::new(to_screen_x(world.x, camera_x), world.y, world.w, world.h);
        // Cull anything fully off either side of the screen
        if rect.x > -rect.w && rect.x < viewport_width {
            frame.sprites.push(Sprite { kind, rect, anim_frame });
        }
    };

    let ground = Rect::new(
        0.0,
        session.config.ground_y(),
        session.config.world_width,
        GROUND_INSET,
    );
    push(SpriteKind::Ground, ground, 0);

    for platform in &session.layout.platforms {
        push(SpriteKind::Platform, platform.rect, 0);
    }
    for coin in session.layout.coins.iter().filter(|c| !c.collected) {
        push(SpriteKind::Coin, coin.rect, coin.anim.frame);
    }
    for enemy in &session.enemies {
        push(
            SpriteKind::Enemy {
                kind: enemy.kind,
                chasing: enemy.is_chasing(),
            },
            enemy.body.aabb(),
            enemy.anim.frame,
        );
    }
    push(
        SpriteKind::Hero {
            facing: hero.facing,
            jumping: hero.is_jumping,
            running: hero.is_running,
        },
        hero.body.aabb(),
        hero.anim.frame,
    );

    frame
}
