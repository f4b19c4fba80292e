//! End-to-end session scenarios

use glam::Vec2;
use platformer_adventure::WorldConfig;
use platformer_adventure::consts::*;
use platformer_adventure::sim::{
    Enemy, EnemyKind, GameEvent, Hero, HeroControls, MenuAction, Session, SessionPhase, TickInput,
    tick,
};

fn start() -> TickInput {
    TickInput {
        menu: Some(MenuAction::Start),
        ..Default::default()
    }
}

fn hold_right() -> TickInput {
    TickInput {
        right: true,
        ..Default::default()
    }
}

#[test]
fn hero_runs_into_right_world_edge() {
    let config = WorldConfig::default();
    let mut hero = Hero::spawn(&config);
    hero.body.pos.y = config.ground_y() - hero.body.height();
    let right = HeroControls {
        right: true,
        ..Default::default()
    };

    let mut clamped_at = None;
    for t in 1..=390 {
        hero.update(right, &config, &[]);
        assert!(hero.x() <= WORLD_WIDTH - HERO_SIZE as f32);
        if clamped_at.is_none() && hero.x() == 1968.0 {
            clamped_at = Some(t);
        }
    }
    assert_eq!(hero.x(), 1968.0);
    // 50 + 5t reaches 1968 part-way through tick 384 and is clamped there
    assert_eq!(clamped_at, Some(384));
}

#[test]
fn enemy_patrols_between_bounds_forever() {
    let config = WorldConfig::default();
    let y = config.ground_y() - ENEMY_SIZE as f32;
    let mut enemy = Enemy::new(Vec2::new(300.0, y), EnemyKind::Basic, config.enemy_speed);
    let hero_x = 1900.0;

    let mut turns = Vec::new();
    let mut last_vel = enemy.body.vel.x;
    for _ in 0..400 {
        let x_before = enemy.x();
        enemy.update(hero_x, &config, &[]);
        if enemy.body.vel.x != last_vel {
            turns.push((x_before, enemy.body.vel.x));
            last_vel = enemy.body.vel.x;
        }
        assert!(enemy.x() >= 248.0 && enemy.x() <= 352.0);
    }

    assert!(turns.len() >= 6);
    for (i, (x, vel)) in turns.iter().enumerate() {
        if i % 2 == 0 {
            assert_eq!((*x, *vel), (250.0, 2.0));
        } else {
            assert_eq!((*x, *vel), (350.0, -2.0));
        }
    }
}

#[test]
fn start_from_menu_resets_previous_score() {
    let mut session = Session::default();
    session.start();
    session.score = 80;
    session.phase = SessionPhase::Menu;

    tick(&mut session, &start());
    assert_eq!(session.phase, SessionPhase::Playing);
    assert_eq!(session.score, 0);

    let coin = session.layout.coins[0].rect;
    session.hero.body.pos = Vec2::new(coin.x, coin.y);
    let events = tick(&mut session, &TickInput::default());
    assert!(events.contains(&GameEvent::CoinCollected { score: 10 }));
    assert_eq!(session.score, 10);
}

#[test]
fn victory_on_the_tick_hero_crosses_the_margin() {
    let mut session = Session::default();
    tick(&mut session, &start());
    session.hero.body.pos.x = 1941.0;

    let events = tick(&mut session, &hold_right());
    assert_eq!(session.hero.x(), 1946.0);
    assert_eq!(session.phase, SessionPhase::Playing);
    assert!(events.iter().all(|e| !matches!(e, GameEvent::VictoryReached { .. })));

    let events = tick(&mut session, &hold_right());
    assert_eq!(session.hero.x(), 1951.0);
    assert_eq!(session.phase, SessionPhase::Victory);
    assert!(events.contains(&GameEvent::VictoryReached { score: 0 }));

    // Frozen afterwards
    tick(&mut session, &hold_right());
    assert_eq!(session.hero.x(), 1951.0);
}

#[test]
fn sustained_enemy_contact_kills_in_five_ticks() {
    let mut session = Session::default();
    tick(&mut session, &start());
    session.enemies.truncate(1);
    for _ in 0..30 {
        tick(&mut session, &TickInput::default());
    }
    assert!(session.hero.body.grounded);

    for n in 1..=5 {
        session.hero.body.pos.x = session.enemies[0].x();
        let events = tick(&mut session, &TickInput::default());
        let hits = events
            .iter()
            .filter(|e| matches!(e, GameEvent::HeroHit { .. }))
            .count();
        assert_eq!(hits, 1);
        assert_eq!(session.hero.health, HERO_MAX_HEALTH - ENEMY_DAMAGE * n);
        if n < 5 {
            assert_eq!(session.phase, SessionPhase::Playing);
        } else {
            assert_eq!(session.phase, SessionPhase::GameOver);
            assert!(events.contains(&GameEvent::Defeated { score: 0 }));
        }
    }

    // Score and health survive into GameOver until a restart
    tick(&mut session, &TickInput::default());
    assert_eq!(session.hero.health, 0);

    let events = tick(
        &mut session,
        &TickInput {
            restart: true,
            ..Default::default()
        },
    );
    assert_eq!(events[0], GameEvent::SessionStarted);
    assert_eq!(session.hero.health, HERO_MAX_HEALTH);
}

#[test]
fn identical_inputs_give_identical_sessions() {
    let mut a = Session::default();
    let mut b = Session::default();
    let script = [start(), hold_right(), hold_right(), TickInput::default()];
    for _ in 0..50 {
        for input in &script {
            tick(&mut a, input);
            tick(&mut b, input);
        }
    }
    assert_eq!(a.time_ticks, b.time_ticks);
    assert_eq!(a.hero.body, b.hero.body);
    assert_eq!(a.score, b.score);
}

#[test]
fn victory_wins_a_tie_with_death() {
    let mut session = Session::default();
    tick(&mut session, &start());
    session.enemies.truncate(1);
    session.hero.health = ENEMY_DAMAGE;
    session.hero.body.pos.x = 1960.0;
    session.enemies[0].body.pos = session.hero.body.pos;

    let events = tick(&mut session, &TickInput::default());
    assert_eq!(session.hero.health, 0);
    assert!(session.hero.is_dead());
    assert_eq!(session.phase, SessionPhase::Victory);
    assert_eq!(
        events,
        vec![
            GameEvent::HeroHit { health: 0 },
            GameEvent::VictoryReached { score: 0 },
        ]
    );
}
