use serde::Deserialize;
use crate::error::PreferenceError;

pub const DEFAULT_STORAGE_KEY: &str = "TRUNGK18_BLOG_DARK_MODE";
pub const DARK_MODE_QUERY: &str = "(prefers-color-scheme: dark)";
pub const DARK_CLASS: &str = "dark";
pub const MOON_ICON: &str = "fa-moon-o";
pub const SUN_ICON: &str = "fa-sun-o";
pub const TOGGLE_CONTAINER_ID: &str = "DarkThemeToggleContainer";
pub const TOGGLE_ICON_ID: &str = "DarkThemeToggleIcon";

/// Identifiers shared by the preference engine and the markup that hosts it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub media_query: String,
    pub dark_class: String,
    pub moon_icon: String,
    pub sun_icon: String,
    pub toggle_container_id: String,
    pub toggle_icon_id: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            media_query: DARK_MODE_QUERY.to_string(),
            dark_class: DARK_CLASS.to_string(),
            moon_icon: MOON_ICON.to_string(),
            sun_icon: SUN_ICON.to_string(),
            toggle_container_id: TOGGLE_CONTAINER_ID.to_string(),
            toggle_icon_id: TOGGLE_ICON_ID.to_string(),
        }
    }
}

impl ThemeConfig {
    /// Parses a (possibly partial) JSON object; absent fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, PreferenceError> {
        let config = serde_json::from_str(raw)?;
        Ok(config)
    }

    pub fn from_env() -> Self {
        let mut config = match std::env::var("THEME_CONFIG") {
            Ok(raw) =>
                Self::from_json(&raw).unwrap_or_else(|e| {
                    log::warn!("THEME_CONFIG ignored, using defaults: {}", e);
                    Self::default()
                }),
            Err(_) => Self::default(),
        };

        if let Ok(key) = std::env::var("THEME_STORAGE_KEY") {
            if key.trim().is_empty() {
                log::warn!("THEME_STORAGE_KEY is empty, keeping {}", config.storage_key);
            } else {
                config.storage_key = key;
            }
        }

        log::info!("Theme preference stored under key: {}", config.storage_key);
        config
    }
}
