//! Audio dispatch
//!
//! The simulation only emits [`GameEvent`]s. The dispatcher turns them into
//! cue and music requests on an [`AudioSink`], honouring the player's audio
//! preferences. Playback is fire-and-forget: a failing sink is logged and
//! otherwise ignored.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::AudioError;
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Audio assets the game knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Hero left the ground
    Jump,
    /// Coin picked up
    Coin,
    /// Hero touched an enemy
    Hit,
    /// Goal reached
    Victory,
    /// Looping background track
    Music,
}

impl SoundCue {
    pub const ALL: [SoundCue; 5] = [
        SoundCue::Jump,
        SoundCue::Coin,
        SoundCue::Hit,
        SoundCue::Victory,
        SoundCue::Music,
    ];

    /// File name of the asset backing this cue
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundCue::Jump => "jump.wav",
            SoundCue::Coin => "coin.wav",
            SoundCue::Hit => "hit.wav",
            SoundCue::Victory => "victory.wav",
            SoundCue::Music => "background.wav",
        }
    }

    /// Cue for a simulation event, if it makes a sound
    pub fn for_event(event: &GameEvent) -> Option<SoundCue> {
        match event {
            GameEvent::Jumped => Some(SoundCue::Jump),
            GameEvent::CoinCollected { .. } => Some(SoundCue::Coin),
            GameEvent::HeroHit { .. } => Some(SoundCue::Hit),
            GameEvent::VictoryReached { .. } => Some(SoundCue::Victory),
            _ => None,
        }
    }
}

/// Backend that actually makes noise
pub trait AudioSink {
    /// Play a one-shot cue at the given volume (0.0 - 1.0)
    fn play(&mut self, cue: SoundCue, volume: f32) -> Result<(), AudioError>;
    /// Start the looping background track
    fn start_music(&mut self, volume: f32) -> Result<(), AudioError>;
    /// Stop the background track
    fn stop_music(&mut self) -> Result<(), AudioError>;
}

/// Sink that discards every request
#[derive(Debug, Default)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn play(&mut self, _cue: SoundCue, _volume: f32) -> Result<(), AudioError> {
        Ok(())
    }

    fn start_music(&mut self, _volume: f32) -> Result<(), AudioError> {
        Ok(())
    }

    fn stop_music(&mut self) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Catalog of the .wav files in a sound directory
///
/// Reports asset availability and produces no sound: it resolves each request
/// to a file and logs it, for headless runs and for hosts that want to know
/// up front which cues will be silent. Missing files are reported once at
/// load time; requests for them fail with [`AudioError::AssetUnavailable`]
/// while the rest keep working.
#[derive(Debug)]
pub struct AssetCatalogSink {
    dir: PathBuf,
    assets: HashMap<SoundCue, PathBuf>,
    music_playing: bool,
}

impl AssetCatalogSink {
    pub fn load(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref().to_path_buf();
        let mut assets = HashMap::new();
        for cue in SoundCue::ALL {
            let path = dir.join(cue.file_name());
            if path.is_file() {
                log::debug!("Audio asset {:?}: {}", cue, path.display());
                assets.insert(cue, path);
            } else {
                log::warn!("Audio asset missing for {:?}: {}", cue, path.display());
            }
        }
        Self {
            dir,
            assets,
            music_playing: false,
        }
    }

    pub fn is_available(&self, cue: SoundCue) -> bool {
        self.assets.contains_key(&cue)
    }

    pub fn music_playing(&self) -> bool {
        self.music_playing
    }

    fn asset(&self, cue: SoundCue) -> Result<&Path, AudioError> {
        self.assets
            .get(&cue)
            .map(PathBuf::as_path)
            .ok_or_else(|| AudioError::AssetUnavailable {
                cue,
                path: self.dir.join(cue.file_name()),
            })
    }
}

impl AudioSink for AssetCatalogSink {
    fn play(&mut self, cue: SoundCue, volume: f32) -> Result<(), AudioError> {
        let path = self.asset(cue)?;
        log::debug!("play {} at {:.2}", path.display(), volume);
        Ok(())
    }

    fn start_music(&mut self, volume: f32) -> Result<(), AudioError> {
        let path = self.asset(SoundCue::Music)?;
        log::debug!("loop {} at {:.2}", path.display(), volume);
        self.music_playing = true;
        Ok(())
    }

    fn stop_music(&mut self) -> Result<(), AudioError> {
        self.music_playing = false;
        Ok(())
    }
}

/// Routes simulation events to an audio sink
pub struct AudioDispatcher<S: AudioSink> {
    sink: S,
    settings: Settings,
}

impl<S: AudioSink> AudioDispatcher<S> {
    pub fn new(sink: S, settings: Settings) -> Self {
        Self { sink, settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// React to every event from one tick
    pub fn dispatch(&mut self, events: &[GameEvent]) {
        for event in events {
            self.handle(event);
        }
    }

    fn handle(&mut self, event: &GameEvent) {
        if let Some(cue) = SoundCue::for_event(event) {
            if self.settings.sound_enabled {
                let volume = self.settings.effective_sfx_volume();
                let result = self.sink.play(cue, volume);
                report(result);
            }
            return;
        }

        match event {
            GameEvent::SessionStarted => {
                if self.settings.music_enabled {
                    self.start_music();
                }
            }
            GameEvent::MusicToggled => {
                self.settings.music_enabled = !self.settings.music_enabled;
                log::info!("Music {}", on_off(self.settings.music_enabled));
                if self.settings.music_enabled {
                    self.start_music();
                } else {
                    report(self.sink.stop_music());
                }
            }
            GameEvent::SoundToggled => {
                self.settings.sound_enabled = !self.settings.sound_enabled;
                log::info!("Sound {}", on_off(self.settings.sound_enabled));
            }
            _ => {}
        }
    }

    fn start_music(&mut self) {
        let volume = self.settings.effective_music_volume();
        report(self.sink.start_music(volume));
    }
}

fn report(result: Result<(), AudioError>) {
    if let Err(e) = result {
        log::warn!("Audio request dropped: {}", e);
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}
