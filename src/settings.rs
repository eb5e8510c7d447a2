//! Game settings and preferences
//!
//! Persisted separately from game balance, as a JSON file next to the
//! binary. Loading never fails; anything unreadable falls back to
//! defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Background ocean track on/off.
    pub music_enabled: bool,
    /// One-shot sound cues on/off.
    pub sounds_enabled: bool,

    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            music_enabled: true,
            sounds_enabled: true,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.3,
        }
    }
}

impl Settings {
    /// Settings file path.
    const FILE: &'static str = "ocean_escape_settings.json";

    /// Load settings, falling back to defaults on any error.
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::FILE) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::FILE);
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed {}: {err}", Self::FILE);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings; IO failures are logged and swallowed.
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(Self::FILE, json) {
                    log::warn!("Failed to save settings: {err}");
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(err) => log::warn!("Failed to serialize settings: {err}"),
        }
    }
}
