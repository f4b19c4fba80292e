//! Platformer Adventure entry point
//!
//! Headless native runner: plays autopiloted sessions and logs what
//! happens. A windowed host wires the same `tick` / `build_frame` /
//! `AudioDispatcher` calls to its own event loop and renderer.
//!
//! Usage:
//!   platformer-adventure [SETTINGS_JSON] [--world WORLD_JSON] [--max-ticks N] [--restart]

use std::path::PathBuf;

use clap::Parser;
use platformer_adventure::audio::{AssetCatalogSink, AudioDispatcher};
use platformer_adventure::frame::build_frame;
use platformer_adventure::sim::{GameEvent, Session, autopilot, tick};
use platformer_adventure::{Settings, WorldConfig};

/// Give up after this many ticks (about five minutes at 60 Hz)
const MAX_TICKS: u64 = 60 * 60 * 5;

#[derive(Parser)]
#[command(name = "platformer-adventure")]
#[command(about = "Run an autopiloted platformer session headlessly")]
struct Args {
    /// Audio settings JSON; defaults are used when omitted or unreadable
    settings: Option<PathBuf>,

    /// World config JSON overriding the built-in physics constants
    #[arg(long, env = "PLATFORMER_WORLD")]
    world: Option<PathBuf>,

    /// Stop after this many ticks
    #[arg(long, default_value_t = MAX_TICKS)]
    max_ticks: u64,

    /// Restart after a win or loss instead of stopping
    #[arg(long)]
    restart: bool,
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let args = Args::parse();
    log::info!("Platformer Adventure (headless) starting...");

    let settings = match &args.settings {
        Some(path) => Settings::load(path).unwrap_or_else(|e| {
            log::warn!("Using default settings: {}", e);
            Settings::default()
        }),
        None => Settings::default(),
    };
    let config = match &args.world {
        Some(path) => WorldConfig::load(path).unwrap_or_else(|e| {
            log::warn!("Using default world: {}", e);
            WorldConfig::default()
        }),
        None => WorldConfig::default(),
    };

    let mut audio = AudioDispatcher::new(AssetCatalogSink::load(&settings.sound_dir), settings);
    let mut session = Session::new(config);

    for _ in 0..args.max_ticks {
        let input = autopilot::drive(&session, args.restart);
        let events = tick(&mut session, &input);
        audio.dispatch(&events);

        for event in &events {
            match event {
                GameEvent::CoinCollected { score } => log::info!("Coin! score {}", score),
                GameEvent::HeroHit { health } => log::info!("Ouch! health {}", health),
                _ => log::debug!("{:?}", event),
            }
        }

        if session.phase.is_terminal() && !args.restart {
            break;
        }
    }

    let frame = build_frame(&session);
    log::info!(
        "Finished in {:?} after {} ticks: score {}, health {}/{}",
        frame.phase,
        session.time_ticks,
        frame.hud.score,
        frame.hud.health,
        frame.hud.max_health
    );
}
