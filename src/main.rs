use anyhow::Result;
use horologist::{config::Config, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle `--generate-config` before touching the terminal
    if std::env::args().any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load()?;
    logger::setup_logging(&config)?;
    log::info!("horologist {} starting", env!("CARGO_PKG_VERSION"));

    // Run the TUI application
    ui::run_app(config).await?;

    Ok(())
}
