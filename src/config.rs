// SPDX-License-Identifier: MPL-2.0
//! Loading and saving of user preferences to a `settings.toml` file.
//!
//! The only persisted state is transient window geometry: the last window
//! size is restored on the next launch. Everything else (zoom, current
//! image) is session-local.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "picsure";

pub const DEFAULT_WINDOW_WIDTH: f32 = 800.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 600.0;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window_width: Option<f32>,
    #[serde(default)]
    pub window_height: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: Some(DEFAULT_WINDOW_WIDTH),
            window_height: Some(DEFAULT_WINDOW_HEIGHT),
        }
    }
}

impl Config {
    /// Returns the stored window size, falling back to the defaults for
    /// missing or non-positive values.
    #[must_use]
    pub fn window_size(&self) -> (f32, f32) {
        let width = self
            .window_width
            .filter(|w| *w > 0.0)
            .unwrap_or(DEFAULT_WINDOW_WIDTH);
        let height = self
            .window_height
            .filter(|h| *h > 0.0)
            .unwrap_or(DEFAULT_WINDOW_HEIGHT);
        (width, height)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
