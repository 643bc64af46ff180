// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[dragbox]` - Accept list, file limit, labels and mount slot
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_DRAGBOX_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_dragbox::app::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.dragbox.max_files = Some(3);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::application::{DragBoxOptions, Texts};
use crate::domain::{AcceptFilter, MaxFiles};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// `accept` may be written either as `"image/*,.pdf"` or as a list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AcceptSpec {
    One(String),
    Many(Vec<String>),
}

impl AcceptSpec {
    #[must_use]
    pub fn to_filter(&self) -> AcceptFilter {
        match self {
            Self::One(list) => AcceptFilter::parse(list),
            Self::Many(items) => AcceptFilter::from_patterns(items),
        }
    }
}

/// Selection box settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DragBoxConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept: Option<AcceptSpec>,

    /// Upper bound on the selection; `0` or absent means unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_files: Option<usize>,

    /// Drop files that do not match `accept` instead of only hinting the dialog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforce_accept: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_drag: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_or: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_select: Option<String>,

    /// Layout slot to mount into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl DragBoxConfig {
    #[must_use]
    pub fn accept_filter(&self) -> AcceptFilter {
        self.accept
            .as_ref()
            .map(AcceptSpec::to_filter)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn max_files(&self) -> MaxFiles {
        MaxFiles::limited(self.max_files.unwrap_or(DEFAULT_MAX_FILES)).unwrap_or_default()
    }

    #[must_use]
    pub fn target(&self) -> &str {
        self.target.as_deref().unwrap_or(DEFAULT_TARGET)
    }

    /// Fills missing labels from `fallback` (usually the localized defaults).
    #[must_use]
    pub fn texts(&self, fallback: Texts) -> Texts {
        Texts {
            drag: self.text_drag.clone().unwrap_or(fallback.drag),
            or: self.text_or.clone().unwrap_or(fallback.or),
            select: self.text_select.clone().unwrap_or(fallback.select),
        }
    }

    /// Builds mount options; hooks are attached by the caller.
    #[must_use]
    pub fn to_options(&self, fallback_texts: Texts) -> DragBoxOptions {
        DragBoxOptions::new()
            .accept(self.accept_filter())
            .max_files(self.max_files())
            .enforce_accept(self.enforce_accept.unwrap_or(DEFAULT_ENFORCE_ACCEPT))
            .texts(self.texts(fallback_texts))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub dragbox: DragBoxConfig,
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Returns the configuration and an optional warning key when the file exists
/// but could not be parsed.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (Config::default(), Some("config-load-error".to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str::<Config>(&content)?)
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match get_config_path_with_override(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Ok(()),
    }
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
