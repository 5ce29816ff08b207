//! # CLI Argument Definitions

use clap::{Parser, Subcommand, ValueEnum};
use sellit::constants::VERSION;
use sellit::registry::ConstantKey;
use std::path::PathBuf;

/// Filter applied when `--log-level` is not given, and while settings load.
pub(crate) const DEFAULT_LOG_LEVEL: &str = "warn";

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "sellit")]
#[command(version = VERSION)]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect SellIt constants and effective settings")]
pub(crate) struct Cli {
    /// Log filter for diagnostics (e.g. `info`, `sellit_kernel=debug`); overrides `logging.level`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List every application constant
    Constants,
    /// Print the value of one constant
    Get {
        #[arg(value_enum)]
        key: Key,
    },
    /// Show the settings after file and environment overrides
    Settings {
        /// Settings file; defaults to `sellit` with any supported extension
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Command-line names of the constants: kebab-case or the canonical upper-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Key {
    #[value(alias = "APP_NAME")]
    AppName,
    #[value(alias = "VERSION")]
    Version,
    #[value(alias = "DEFAULT_PAGE_SIZE")]
    DefaultPageSize,
    #[value(alias = "MAX_RETRIES")]
    MaxRetries,
}

impl From<Key> for ConstantKey {
    fn from(key: Key) -> Self {
        match key {
            Key::AppName => Self::AppName,
            Key::Version => Self::Version,
            Key::DefaultPageSize => Self::DefaultPageSize,
            Key::MaxRetries => Self::MaxRetries,
        }
    }
}
