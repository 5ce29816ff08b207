#![allow(clippy::print_stdout)]

mod args;
mod handlers;

use crate::args::{Cli, Command, DEFAULT_LOG_LEVEL};
use anyhow::{Context, Result};
use clap::Parser;
use sellit::registry::ConstantKey;
use sellit_logger::Logger;

const LOGGER_NAME: &str = env!("CARGO_PKG_NAME");

fn main() -> Result<()> {
    let cli = Cli::parse();
    let bootstrap_level = cli.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL);

    match cli.command {
        Command::Constants => {
            let _logger = console_logger(bootstrap_level)?;
            print!("{}", handlers::render_constants());
        }
        Command::Get { key } => {
            let _logger = console_logger(bootstrap_level)?;
            println!("{}", ConstantKey::from(key).value());
        }
        Command::Settings { config } => {
            // Settings are loaded under a temporary console subscriber; the global
            // logger is then built from their `[logging]` section.
            let settings = Logger::scoped(bootstrap_level, || sellit::init(config.as_deref()))
                .context("Failed to initialize logging")?
                .context("Critical: Settings are malformed")?;

            let logging = handlers::effective_logging(&settings, cli.log_level.as_deref());
            let _logger = Logger::from_config(LOGGER_NAME, &logging).context("Failed to initialize logging")?;

            print!("{}", handlers::render_settings(&settings, &logging));
        }
    }

    Ok(())
}

fn console_logger(directives: &str) -> Result<Logger> {
    Logger::builder().name(LOGGER_NAME).env_filter(directives).init().context("Failed to initialize logging")
}
