//! Game settings and world configuration
//!
//! Both are read from JSON and never written back. Missing fields fall back
//! to defaults, so a settings file only needs the keys it changes.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Audio preferences
///
/// Process-wide: toggled from the menu and kept across session transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Background music on/off
    pub music_enabled: bool,
    /// Sound effects on/off
    pub sound_enabled: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Directory holding the .wav assets
    pub sound_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            music_enabled: true,
            sound_enabled: true,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            sound_dir: PathBuf::from("sounds"),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        load_json(path.as_ref())
    }

    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Effective effect volume (0 when sound is off)
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.sound_enabled {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Effective music volume (0 when music is off)
    pub fn effective_music_volume(&self) -> f32 {
        if self.music_enabled {
            (self.master_volume * self.music_volume).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Static world parameters, read-only for the lifetime of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub world_width: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub hero_speed: f32,
    pub enemy_speed: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            hero_speed: HERO_SPEED,
            enemy_speed: ENEMY_SPEED,
        }
    }
}

impl WorldConfig {
    /// Load a world configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        load_json(path.as_ref())
    }

    /// Y coordinate of the ground line
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.viewport_height - GROUND_INSET
    }

    /// Hero x at or beyond which the session is won
    #[inline]
    pub fn victory_x(&self) -> f32 {
        self.world_width - VICTORY_MARGIN
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, SettingsError> {
    let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_str(&json)?;
    log::info!("Loaded configuration from {}", path.display());
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_keep_defaults() {
        let settings = Settings::from_json(r#"{ "music_enabled": false }"#).unwrap();
        assert!(!settings.music_enabled);
        assert!(settings.sound_enabled);
        assert_eq!(settings.sound_dir, PathBuf::from("sounds"));
    }

    #[test]
    fn test_effective_volumes_respect_toggles() {
        let mut settings = Settings::default();
        assert!((settings.effective_sfx_volume() - 0.8).abs() < 1e-6);
        settings.sound_enabled = false;
        assert_eq!(settings.effective_sfx_volume(), 0.0);
        settings.music_enabled = false;
        assert_eq!(settings.effective_music_volume(), 0.0);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = WorldConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }

    #[test]
    fn test_world_defaults() {
        let config = WorldConfig::default();
        assert_eq!(config.ground_y(), 500.0);
        assert_eq!(config.victory_x(), 1950.0);
    }
}
