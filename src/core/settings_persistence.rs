//! Settings persistence
//!
//! Saves and loads [`EngineSettings`] to/from a JSON file.
//!
//! # File Location
//!
//! `settings.json` in the user's configuration directory, e.g.
//! `~/.config/chess_rules/settings.json` on Linux. Falls back to the working
//! directory when no configuration directory can be determined. The CLI can
//! point at another file with `--settings`.
//!
//! # Error Handling
//!
//! [`load_settings`] and [`save_settings`] return [`CoreResult`].
//! [`load_or_default`] never fails: a missing or unreadable file logs and
//! yields defaults.

use crate::core::error::CoreResult;
use crate::core::settings::EngineSettings;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Resolve the default settings file path
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("org", "chess_rules", "chess_rules") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        // Fallback to current directory
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read and parse the settings file at `path`
pub fn load_settings(path: &Path) -> CoreResult<EngineSettings> {
    let contents = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&contents)?;
    Ok(settings)
}

/// Load settings from `path`, falling back to defaults
pub fn load_or_default(path: &Path) -> EngineSettings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return EngineSettings::default();
    }

    match load_settings(path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            EngineSettings::default()
        }
    }
}

/// Write `settings` to `path` as pretty JSON, creating parent directories
pub fn save_settings(path: &Path, settings: &EngineSettings) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
