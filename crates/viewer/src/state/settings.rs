//! Persistent application settings, stored as JSON in the platform config
//! directory. Unknown or missing fields fall back to defaults so old
//! settings files keep working.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use shared::CameraLimits;

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub visible: bool,
    /// Half-extent of the grid in ground units
    pub half_extent: f32,
    pub step: f32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            visible: true,
            half_extent: 512.0,
            step: 32.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    pub background_color: [u8; 3],
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            background_color: [135, 206, 235],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub camera: CameraLimits,
    pub grid: GridSettings,
    pub viewport: ViewportSettings,
}

impl AppSettings {
    pub fn load() -> Self {
        let Some(path) = settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => settings,
                Err(err) => {
                    tracing::warn!(?path, %err, "settings file unreadable, using defaults");
                    Self::default()
                }
            },
            Err(err) => {
                tracing::warn!(?path, %err, "could not read settings file");
                Self::default()
            }
        }
    }

    pub fn save(&self) {
        let Some(path) = settings_path() else {
            tracing::warn!("no config directory available, settings not saved");
            return;
        };
        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                tracing::warn!(?path, %err, "could not create settings directory");
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(&path, json) {
                    tracing::warn!(?path, %err, "settings write failed");
                }
            }
            Err(err) => tracing::warn!(%err, "settings serialization failed"),
        }
    }
}

fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "campus-viewer").map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip() {
        let mut settings = AppSettings::default();
        settings.grid.visible = false;
        settings.camera.max_height = 300.0;
        let json = serde_json::to_string(&settings).unwrap();
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn empty_settings_file_yields_defaults() {
        let settings: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, AppSettings::default());
    }
}
