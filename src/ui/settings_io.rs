use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::ui::settings::UiSettings;

const APP_DIR: &str = "governance_quiz";

fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path.push("settings.json");
    path
}

/// `<data_dir>/governance_quiz/leaderboard.csv`, or `./leaderboard.csv`.
pub fn default_leaderboard_path() -> PathBuf {
    match dirs::data_dir() {
        Some(mut path) => {
            path.push(APP_DIR);
            path.push("leaderboard.csv");
            path
        }
        None => PathBuf::from("leaderboard.csv"),
    }
}

pub fn leaderboard_path(settings: &UiSettings) -> PathBuf {
    settings
        .leaderboard_path
        .clone()
        .unwrap_or_else(default_leaderboard_path)
}

pub fn load_settings() -> UiSettings {
    let path = settings_path();
    match read_settings(&path) {
        Ok(settings) => settings,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "using default settings");
            UiSettings::default()
        }
    }
}

pub fn save_settings(settings: &UiSettings) {
    let path = settings_path();
    if let Err(e) = write_settings(&path, settings) {
        warn!(error = %e, "settings not saved");
    }
}

fn read_settings(path: &Path) -> Result<UiSettings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn write_settings(path: &Path, settings: &UiSettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}
