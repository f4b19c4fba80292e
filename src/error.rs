//! Error types
//!
//! Only two things can fail in this crate: audio assets and configuration
//! files. Neither is ever fatal to the simulation.

use std::path::PathBuf;

use thiserror::Error;

use crate::audio::SoundCue;

/// Audio failures, recovered locally by the dispatcher
#[derive(Debug, Error)]
pub enum AudioError {
    /// The asset backing a cue could not be found or loaded
    #[error("audio asset for {cue:?} unavailable: {}", .path.display())]
    AssetUnavailable { cue: SoundCue, path: PathBuf },

    /// The backend refused to play an otherwise available asset
    #[error("audio playback failed: {0}")]
    Playback(String),
}

/// Configuration loading failures
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
