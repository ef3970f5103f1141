//! Application Configuration
//!
//! Resolved once at startup, highest priority first:
//! 1. Settings saved from the Settings screen (browser local storage)
//! 2. Build-time environment (`SHOP_NOTES_API_URL`, `SHOP_NOTES_LOG_LEVEL`)
//! 3. Defaults

use log::LevelFilter;
use rest_collection::{normalize_base_url, ApiError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Local storage key of the saved settings
const STORAGE_KEY: &str = "shop-notes.config";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    InvalidUrl(#[from] ApiError),

    #[error("unknown log level {0:?}")]
    InvalidLogLevel(String),

    #[error("browser storage is not available")]
    StorageUnavailable,

    #[error("failed to encode settings: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backend address, without trailing slash
    pub api_base_url: String,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Full resolution: defaults, then build env, then saved settings.
    ///
    /// Invalid layers are logged and skipped.
    pub fn load() -> Self {
        let base = Self::default().with_overrides(
            option_env!("SHOP_NOTES_API_URL"),
            option_env!("SHOP_NOTES_LOG_LEVEL"),
        );
        match load_saved() {
            Some(saved) => base.merge_saved(saved),
            None => base,
        }
    }

    /// Apply overrides that pass validation
    pub fn with_overrides(mut self, api_url: Option<&str>, log_level: Option<&str>) -> Self {
        if let Some(url) = api_url {
            match normalize_base_url(url) {
                Ok(url) => self.api_base_url = url,
                Err(e) => log::warn!("[config] ignoring API URL override: {}", e),
            }
        }
        if let Some(level) = log_level {
            match parse_level(level) {
                Ok(_) => self.log_level = level.trim().to_lowercase(),
                Err(e) => log::warn!("[config] ignoring log level override: {}", e),
            }
        }
        self
    }

    /// Layer saved settings on top; invalid saved values keep ours
    pub fn merge_saved(self, saved: AppConfig) -> Self {
        self.with_overrides(Some(&saved.api_base_url), Some(&saved.log_level))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        normalize_base_url(&self.api_base_url)?;
        parse_level(&self.log_level)?;
        Ok(())
    }

    pub fn log_level_filter(&self) -> LevelFilter {
        parse_level(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    /// Persist for the next start
    pub fn save(&self) -> Result<(), ConfigError> {
        self.validate()?;
        let json = serde_json::to_string(self)?;
        let storage = local_storage().ok_or(ConfigError::StorageUnavailable)?;
        storage
            .set_item(STORAGE_KEY, &json)
            .map_err(|_| ConfigError::StorageUnavailable)
    }
}

fn parse_level(raw: &str) -> Result<LevelFilter, ConfigError> {
    raw.trim()
        .parse::<LevelFilter>()
        .map_err(|_| ConfigError::InvalidLogLevel(raw.to_string()))
}

fn load_saved() -> Option<AppConfig> {
    let json = local_storage()?.get_item(STORAGE_KEY).ok()??;
    match serde_json::from_str(&json) {
        Ok(saved) => Some(saved),
        Err(e) => {
            log::warn!("[config] discarding unreadable saved settings: {}", e);
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(not(target_arch = "wasm32"))]
fn local_storage() -> Option<web_sys::Storage> {
    None
}
