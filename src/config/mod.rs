// SPDX-License-Identifier: MPL-2.0
//! This module handles the library's configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Fallback language
//! - `[notifications]` - Toast container capacity, anchor and default duration
//! - `[navbar]` - Scroll threshold
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `NUVO_UI_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use nuvo_ui::config::{self, Config};
//! use nuvo_ui::i18n::Language;
//!
//! let mut config = config::load();
//! config.general.default_language = Language::Et;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::i18n::Language;
use crate::ui::notifications::Position;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
pub const APP_NAME: &str = "NuvoUi";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "NUVO_UI_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Language used when nothing else (storage, path, locale) matches.
    #[serde(default)]
    pub default_language: Language,
}

/// Toast container settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,

    #[serde(default)]
    pub position: Position,

    /// Auto-dismiss delay for toasts the application pushes; 0 disables it.
    #[serde(default = "default_duration_ms")]
    pub default_duration_ms: u64,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            max_visible: DEFAULT_MAX_VISIBLE_TOASTS,
            position: Position::default(),
            default_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

/// Navigation bar settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavbarConfig {
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold: f32,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
        }
    }
}

fn default_max_visible() -> usize {
    DEFAULT_MAX_VISIBLE_TOASTS
}

fn default_duration_ms() -> u64 {
    DEFAULT_TOAST_DURATION_MS
}

fn default_scroll_threshold() -> f32 {
    DEFAULT_SCROLL_THRESHOLD
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub navbar: NavbarConfig,
}

impl Config {
    /// Clamps values a hand-edited file could push out of range.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.notifications.max_visible = self
            .notifications
            .max_visible
            .clamp(1, MAX_VISIBLE_TOASTS_LIMIT);
        if !self.navbar.scroll_threshold.is_finite() || self.navbar.scroll_threshold < 0.0 {
            self.navbar.scroll_threshold = DEFAULT_SCROLL_THRESHOLD;
        }
        self
    }
}

/// Returns the directory holding `settings.toml` and the key-value store.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|path| path.join(APP_NAME))
}

fn get_default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from the default location.
///
/// A missing file yields the defaults. An unreadable or invalid file is
/// logged and also yields the defaults.
#[must_use]
pub fn load() -> Config {
    let Some(path) = get_default_config_path() else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }
    match load_from_path(&path) {
        Ok(config) => config,
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "falling back to default settings");
            Config::default()
        }
    }
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config.sanitized())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
