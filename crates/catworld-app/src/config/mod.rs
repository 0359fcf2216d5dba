//! Configuration file parsing for CatWorld
//!
//! Supports `<config_dir>/catworld/config.toml` or an explicit `--config` path.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, validate_settings};
pub use types::*;
