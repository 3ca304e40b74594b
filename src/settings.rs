//! Settings persistence
//!
//! Saves and loads [`Settings`] to/from a JSON file so preferences survive
//! between sessions.
//!
//! # File Location
//!
//! `settings.json` in the platform configuration directory (resolved with
//! [`ProjectDirs`]), or in the working directory when the platform has none.
//!
//! # Error Handling
//!
//! [`Settings::load_or_default`] never fails: a missing file gives the
//! defaults, and an unreadable or malformed one is logged and also gives the
//! defaults. Saving reports its errors to the caller.

use crate::error::SettingsResult;
use chess_engine::constants::DEFAULT_DEPTH;
use chess_logic::Color;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Engine search depth in plies
    pub depth: u32,
    /// Colour the human plays; the engine takes the other one
    pub player_color: Color,
    /// Print the engine's score and node count after each of its moves
    pub show_hints: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            depth: DEFAULT_DEPTH,
            player_color: Color::White,
            show_hints: false,
        }
    }
}

/// Resolve the settings file path
///
/// E.g. `~/.config/satranc/settings.json` on Linux. Falls back to a local
/// `settings.json` if the system config dir cannot be found.
pub fn settings_path() -> PathBuf {
    match ProjectDirs::from("com", "satranc", "Satranc") {
        Some(proj_dirs) => proj_dirs.config_dir().join(SETTINGS_FILENAME),
        None => PathBuf::from(SETTINGS_FILENAME),
    }
}

impl Settings {
    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("[SETTINGS] No settings file at {:?}, using defaults", path);
            return Settings::default();
        }

        match Settings::load_from(path) {
            Ok(settings) => {
                info!("[SETTINGS] Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!(
                    "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                    path, e
                );
                Settings::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!("[SETTINGS] Saved settings to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("satranc-settings-{}-{}", process::id(), name))
            .join(SETTINGS_FILENAME)
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("roundtrip");
        let settings = Settings {
            depth: 4,
            player_color: Color::Black,
            show_hints: true,
        };

        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), settings);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"player_color": "black"}"#).unwrap();
        assert_eq!(settings.depth, DEFAULT_DEPTH);
        assert_eq!(settings.player_color, Color::Black);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let path = scratch_path("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        assert!(Settings::load_from(&path).is_err());
        assert_eq!(Settings::load_or_default(&path), Settings::default());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = scratch_path("missing");
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }
}
