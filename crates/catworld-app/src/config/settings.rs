//! Settings loader for config.toml

use super::types::Settings;
use catworld_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "catworld";

const MIN_TICK_RATE_MS: u64 = 10;
/// Upper bound on facts per refresh; each fact is its own request
pub const MAX_FACT_COUNT: usize = 50;
const MIN_TIMEOUT_MS: u64 = 100;

/// Default location: `<config_dir>/catworld/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, or the default location when `None`.
///
/// A missing file yields defaults; an unreadable or unparsable file is
/// logged and also yields defaults.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = match path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(p) => p,
        None => {
            debug!("No config directory available, using defaults");
            return Settings::default();
        }
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    let settings = match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    };

    validate_settings(settings)
}

/// Clamp values that would stall or break the page
pub fn validate_settings(mut settings: Settings) -> Settings {
    if settings.facts.count == 0 {
        warn!("facts.count = 0 is not allowed, using 1");
        settings.facts.count = 1;
    }
    if settings.facts.count > MAX_FACT_COUNT {
        warn!(
            "facts.count = {} is too high, using {}",
            settings.facts.count, MAX_FACT_COUNT
        );
        settings.facts.count = MAX_FACT_COUNT;
    }
    if settings.api.timeout_ms < MIN_TIMEOUT_MS {
        warn!(
            "api.timeout_ms = {} is too low, using {}",
            settings.api.timeout_ms, MIN_TIMEOUT_MS
        );
        settings.api.timeout_ms = MIN_TIMEOUT_MS;
    }
    if settings.ui.tick_rate_ms < MIN_TICK_RATE_MS {
        settings.ui.tick_rate_ms = MIN_TICK_RATE_MS;
    }
    settings.ui.like_animation_ticks = settings.ui.like_animation_ticks.max(1);
    settings.ui.carousel_animation_ticks = settings.ui.carousel_animation_ticks.max(1);
    settings
}

/// Write a commented default config file if none exists
pub fn init_config_file(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    let default_content = r#"# CatWorld Configuration

[api]
fact_base_url = "https://catfact.ninja"
image_base_url = "https://api.thecatapi.com"
timeout_ms = 10000

[facts]
count = 5                   # Facts fetched per refresh on the full page

[ui]
variant = "full"            # classic | selector | showcase | full
tick_rate_ms = 50
like_animation_ticks = 8
carousel_animation_ticks = 4
"#;

    std::fs::write(path, default_content)?;
    info!("Wrote default config to {:?}", path);
    Ok(())
}
