//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "CATWORLD_LOG";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/catworld/logs/` so the terminal
/// stays clean while the page is drawn.
/// Log level is controlled by `CATWORLD_LOG` environment variable.
///
/// # Examples
/// ```bash
/// CATWORLD_LOG=debug cargo run
/// CATWORLD_LOG=catworld_app=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "catworld.log");

    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_filter()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("CatWorld starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Filter used when `CATWORLD_LOG` is unset or invalid
fn default_filter() -> &'static str {
    "catworld=info,catworld_app=info,catworld_client=info,warn"
}

/// Directory holding the daily `catworld.log.<date>` files
pub fn log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("catworld").join("logs"))
}
