#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context;
use sreg_desktop::DesktopApp;
use sreg_kernel::config::load_app_config;
use sreg_kernel::domain::config::LoggingConfig;
use sreg_logger::{LevelFilter, Logger};
use sreg_registration::RegistrationController;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

fn init_logger(cfg: &LoggingConfig) -> anyhow::Result<Logger> {
    let level = LevelFilter::from_str(&cfg.level)
        .with_context(|| format!("Invalid logging.level '{}'", cfg.level))?;

    let mut builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level).console(true);
    if let Some(filter) = &cfg.filter {
        builder = builder.env_filter(filter.as_str());
    }

    let logger = match &cfg.directory {
        Some(dir) => builder.path(dir).max_files(cfg.max_files).json(cfg.json).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let cfg = load_app_config(config_path).context("Critical: Configuration is malformed")?;

    let _log = init_logger(&cfg.logging)?;

    let controller =
        RegistrationController::new(&cfg).context("Failed to open the registration data directory")?;
    info!(data_dir = %controller.repository().data_dir().display(), "Registration form starting");

    DesktopApp::from_config(&cfg.window).launch(controller);

    Ok(())
}
