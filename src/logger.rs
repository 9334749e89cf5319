//! File-based logging setup
//!
//! The TUI owns stdout, so logs go to a file. When logging is disabled in
//! the configuration, everything above the `Off` level is discarded.

use crate::config::Config;
use anyhow::{Context, Result};
use log::LevelFilter;

/// Install the global logger according to the configuration.
pub fn setup_logging(config: &Config) -> Result<()> {
    if !config.logging.enabled {
        fern::Dispatch::new().level(LevelFilter::Off).apply().context("Failed to install logger")?;
        return Ok(());
    }

    let log_path = config.log_file_path()?;
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ));
        })
        .level(LevelFilter::Debug)
        .chain(fern::log_file(&log_path).with_context(|| format!("Failed to open log file: {}", log_path.display()))?)
        .apply()
        .context("Failed to install logger")?;

    Ok(())
}
