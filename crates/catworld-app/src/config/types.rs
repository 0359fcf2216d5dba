//! Configuration types for CatWorld
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `ApiSettings`, `FactSettings`, `UiSettings` - sections of config.toml

use std::time::Duration;

use catworld_client::{DEFAULT_FACT_BASE_URL, DEFAULT_IMAGE_BASE_URL};
use catworld_core::PageVariant;
use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub facts: FactSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Remote service settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL of the random-fact service (`GET <base>/fact`)
    #[serde(default = "default_fact_base_url")]
    pub fact_base_url: String,

    /// Base URL of the image service (`GET <base>/v1/images/search`)
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            fact_base_url: default_fact_base_url(),
            image_base_url: default_image_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_fact_base_url() -> String {
    DEFAULT_FACT_BASE_URL.to_string()
}

fn default_image_base_url() -> String {
    DEFAULT_IMAGE_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

/// Fact list settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FactSettings {
    /// Facts fetched per refresh in the full page
    #[serde(default = "default_fact_count")]
    pub count: usize,
}

impl Default for FactSettings {
    fn default() -> Self {
        Self {
            count: default_fact_count(),
        }
    }
}

fn default_fact_count() -> usize {
    5
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Page iteration mounted at startup
    #[serde(default)]
    pub variant: PageVariant,

    /// Event poll interval, which is also the animation tick
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Length of the like animation in ticks
    #[serde(default = "default_like_animation_ticks")]
    pub like_animation_ticks: u16,

    /// Length of the carousel slide animation in ticks
    #[serde(default = "default_carousel_animation_ticks")]
    pub carousel_animation_ticks: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            variant: PageVariant::default(),
            tick_rate_ms: default_tick_rate_ms(),
            like_animation_ticks: default_like_animation_ticks(),
            carousel_animation_ticks: default_carousel_animation_ticks(),
        }
    }
}

impl UiSettings {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_like_animation_ticks() -> u16 {
    8
}

fn default_carousel_animation_ticks() -> u16 {
    4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.facts.count, 5);
        assert_eq!(settings.ui.variant, PageVariant::Full);
        assert_eq!(settings.api.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_partial_sections() {
        let settings: Settings = toml::from_str(
            r#"
            [api]
            timeout_ms = 2500

            [ui]
            variant = "showcase"
            "#,
        )
        .unwrap();
        assert_eq!(settings.api.timeout_ms, 2500);
        assert_eq!(settings.api.fact_base_url, DEFAULT_FACT_BASE_URL);
        assert_eq!(settings.ui.variant, PageVariant::Showcase);
        assert_eq!(settings.ui.tick_rate_ms, 50);
    }

    #[test]
    fn test_unknown_variant_is_an_error() {
        let result = toml::from_str::<Settings>("[ui]\nvariant = \"deluxe\"\n");
        assert!(result.is_err());
    }
}
