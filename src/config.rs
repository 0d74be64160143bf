// src/config.rs
//
// Application configuration
//
// Defaults are usable as-is; a JSON file and environment variables may
// override them.

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

pub const CATALOG_ENV: &str = "QRCALENDAR_CATALOG";
pub const PLACEHOLDER_ENV: &str = "QRCALENDAR_PLACEHOLDER";

const APP_DIR: &str = "qrcalendar";
const CATALOG_FILE: &str = "mediaMapping.json";
const DEFAULT_PLACEHOLDER: &str = "https://placehold.co/600x400?text=Media";
const DESKTOP_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// JSON id → record mapping
    pub catalog_path: PathBuf,

    /// Thumbnail shown for records without one
    pub placeholder_thumbnail: String,

    pub embed: EmbedSettings,
}

/// Options for the embedded web surface, passed along with every embed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedSettings {
    pub javascript_enabled: bool,
    pub dom_storage_enabled: bool,
    pub allows_fullscreen_video: bool,
    pub allows_inline_media_playback: bool,
    pub media_playback_requires_user_action: bool,

    /// Some drive previews refuse mobile web views; a desktop UA gets through
    pub user_agent_override: Option<String>,
}

impl Default for EmbedSettings {
    fn default() -> Self {
        Self {
            javascript_enabled: true,
            dom_storage_enabled: true,
            allows_fullscreen_video: true,
            allows_inline_media_playback: true,
            media_playback_requires_user_action: false,
            user_agent_override: Some(DESKTOP_USER_AGENT.to_string()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            placeholder_thumbnail: DEFAULT_PLACEHOLDER.to_string(),
            embed: EmbedSettings::default(),
        }
    }
}

/// {APP_DATA}/qrcalendar/mediaMapping.json, or ./mediaMapping.json when
/// there is no data directory
pub fn default_catalog_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR).join(CATALOG_FILE))
        .unwrap_or_else(|| PathBuf::from(CATALOG_FILE))
}

impl AppConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Cannot read config {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&raw)
            .map_err(|e| AppError::Config(format!("Invalid config {}: {}", path.display(), e)))
    }

    /// Defaults, then an optional file, then environment overrides
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let config = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply overrides from a key lookup (the environment, in practice)
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(CATALOG_ENV).filter(|v| !v.is_empty()) {
            debug!("Catalog path overridden by {}", CATALOG_ENV);
            self.catalog_path = PathBuf::from(path);
        }
        if let Some(placeholder) = lookup(PLACEHOLDER_ENV).filter(|v| !v.is_empty()) {
            debug!("Placeholder thumbnail overridden by {}", PLACEHOLDER_ENV);
            self.placeholder_thumbnail = placeholder;
        }
        self
    }
}
