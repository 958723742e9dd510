// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: user preferences read
//! from a `settings.toml` file.
//!
//! The file is only ever read. Users edit it by hand; the application keeps
//! no persisted state of its own.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[display]` - Zoom step
//! - `[navigation]` - Sibling list ordering
//! - `[image]` - Resampling filter for scale and rotate
//!
//! # Path Resolution
//!
//! 1. Explicit directory passed to [`load`] (the `--config-dir` CLI flag)
//! 2. `ICED_PHOTOVIEW_CONFIG_DIR` environment variable
//! 3. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_photoview::config;
//!
//! let (config, _warning) = config::load(None);
//! println!("zoom factor: {}", config.zoom_factor());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedPhotoView";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_PHOTOVIEW_CONFIG_DIR";

/// Warning key shown when the config file exists but cannot be used.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

/// Order of the sibling list built when an image is opened.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Raw directory listing order as returned by the OS.
    #[default]
    Directory,
    /// By file name, the order file choosers present.
    Alphabetical,
    ModifiedDate,
}

/// Resampling filter used when the model scales or rotates pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    Nearest,
    Triangle,
    CatmullRom,
    #[default]
    Lanczos3,
}

// =============================================================================
// Section Structs
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Zoom step multiplier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_factor: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NavigationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImageConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resample_filter: Option<ResampleFilter>,
}

/// User preferences, grouped in sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub image: ImageConfig,
}

impl Config {
    /// Zoom step multiplier, clamped to the supported range.
    pub fn zoom_factor(&self) -> f64 {
        self.display
            .zoom_factor
            .filter(|factor| factor.is_finite())
            .unwrap_or(DEFAULT_ZOOM_FACTOR)
            .clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR)
    }

    pub fn sort_order(&self) -> SortOrder {
        self.navigation.sort_order.unwrap_or_default()
    }

    pub fn resample_filter(&self) -> ResampleFilter {
        self.image.resample_filter.unwrap_or_default()
    }
}

/// Resolves the config directory following the documented priority order.
pub fn config_dir(override_dir: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = override_dir {
        return Some(dir.to_path_buf());
    }

    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Loads the configuration, never failing.
///
/// Returns the defaults when the file is missing. When it exists but cannot be
/// read or parsed, returns the defaults together with a warning i18n key.
pub fn load(override_dir: Option<&Path>) -> (Config, Option<&'static str>) {
    let Some(path) = config_dir(override_dir).map(|dir| dir.join(CONFIG_FILE)) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            (config, None)
        }
        Err(err) => {
            log::warn!("Ignoring config file {}: {err}", path.display());
            (Config::default(), Some(CONFIG_LOAD_WARNING_KEY))
        }
    }
}

/// Reads and parses a config file.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .map_err(|err| crate::error::Error::Config(err.to_string()))?;
    Ok(toml::from_str(&content)?)
}
