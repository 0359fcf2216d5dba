//! CatWorld Library
//!
//! Startup for the `catworld` binary: error reporting, logging, settings,
//! and the remote services, then hands over to the TUI.

pub mod cli;

pub use cli::Args;

use catworld_client::HttpCatApi;
use catworld_core::prelude::*;

/// Main application entry point
pub async fn run(args: Args) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::startup(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    catworld_core::logging::init()?;

    if args.init_config {
        let path = args
            .config_path()
            .ok_or_else(|| Error::config("No config directory available"))?;
        catworld_app::config::init_config_file(&path)
            .with_context(|| format!("Writing default config to {}", path.display()))?;
        println!("Config file: {}", path.display());
        return Ok(());
    }

    let settings = args.resolve_settings();
    let api = HttpCatApi::with_config(
        &settings.api.fact_base_url,
        &settings.api.image_base_url,
        settings.api.timeout(),
    )
    .context("Building HTTP client")?;

    let result = catworld_tui::run(settings, api).await;

    if let Err(ref e) = result {
        if e.is_fatal() {
            error!("CatWorld could not start: {}", e);
        } else {
            error!("Application error: {:?}", e);
        }
        // The terminal is back in cooked mode here
        if let Ok(dir) = catworld_core::logging::log_directory() {
            eprintln!("Logs: {}", dir.display());
        }
    }

    info!("CatWorld exiting");
    result
}
