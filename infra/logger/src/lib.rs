//! # Logger
//!
//! One place to install the process-wide `tracing` subscriber for `SellIt`
//! binaries: console output on stderr, optional rolling files written through a
//! non-blocking worker, and level filtering.
//!
//! * Use [`LoggerBuilder::env_filter`] for module-directed filters
//!   (e.g., `"sellit=debug,config=warn"`); without it `RUST_LOG` applies on top
//!   of the default level.
//! * [`Logger::from_config`] installs a logger straight from the `[logging]`
//!   settings section; [`Logger::scoped`] covers the time before those settings
//!   are loaded.
//!
//! ## Example
//!
//! ```rust
//! # use sellit_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("sellit")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use private::Sealed;
use sellit_domain::config::LoggingConfig;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::{fs, io};
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";
const ROTATION: Rotation = Rotation::DAILY;

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync>;

#[derive(Debug)]
struct LoggerSettings {
    console: bool,
    path: Option<PathBuf>,
    level: LevelFilter,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            console: true,
            path: None,
            level: LevelFilter::INFO,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
        }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);
#[derive(Debug)]
pub struct NoFile;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// Type-state builder for the global subscriber.
///
/// A name is required before [`LoggerBuilder::init`] becomes available; file
/// options (`max_files`, `json`) only exist after [`LoggerBuilder::path`].
/// Files roll daily and are named `<name>.<date>.log`.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName, F: Sealed = NoFile> {
    settings: LoggerSettings,
    name: N,
    file: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<NoName, F> {
    /// Names the logger; also the prefix of rolling log files.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, F> {
        LoggerBuilder { settings: self.settings, name: WithName(name.into()), file: PhantomData }
    }
}

impl LoggerBuilder<WithName, WithFile> {
    /// Number of rotated files kept on disk.
    #[must_use]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }

    /// Writes file records as JSON lines.
    #[must_use]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.settings.json = enabled;
        self
    }
}

impl<F: Sealed> LoggerBuilder<WithName, F> {
    /// Minimum level emitted when no filter directive says otherwise.
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Explicit filter directives (e.g., `sellit=debug,config=info`).
    ///
    /// When set, these directives are used instead of `RUST_LOG`. Invalid
    /// directives make [`LoggerBuilder::init`] fail.
    #[must_use]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.settings.env_filter = Some(filter.into());
        self
    }

    /// Toggles the stderr console layer.
    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Also writes rolling log files into `path`.
    pub fn path(self, path: impl Into<PathBuf>) -> LoggerBuilder<WithName, WithFile> {
        let mut settings = self.settings;
        settings.path = Some(path.into());
        LoggerBuilder { settings, name: self.name, file: PhantomData }
    }

    /// Installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive until shutdown: dropping it flushes
    /// buffered file output.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already been set,
    /// [`LoggerError::Appender`] or [`LoggerError::Internal`] if the log directory
    /// cannot be used, and [`LoggerError::InvalidConfiguration`] for invalid settings.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let WithName(name) = self.name;
        let settings = self.settings;
        validate(&settings, &name)?;

        let filter = parse_filter(settings.level, settings.env_filter.as_deref())?;
        let mut layers = Vec::with_capacity(2);
        if settings.console {
            layers.push(console_layer());
        }

        let guard = match &settings.path {
            Some(dir) => {
                let (file, guard) = file_layer(&name, dir, &settings)?;
                layers.push(file);
                Some(guard)
            }
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "console and file output are both disabled".into(),
                context: Some(name.into()),
            });
        }

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;
        Ok(Logger { file_guard: guard })
    }
}

/// Handle to the installed logging system.
///
/// Owns the worker guard of the file writer, if any.
#[must_use = "Dropping this handle stops the background file writer."]
#[derive(Debug)]
pub struct Logger {
    file_guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring the global subscriber.
    ///
    /// ```rust
    /// use sellit_logger::{LevelFilter, Logger};
    ///
    /// let _logger = Logger::builder()
    ///     .name("sellit")
    ///     .level(LevelFilter::DEBUG)
    ///     .init()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { settings: LoggerSettings::default(), name: NoName, file: PhantomData }
    }

    /// Installs the global logger from the `[logging]` settings section.
    ///
    /// `level` is used as the filter directive. With a `directory`, records are
    /// also written to rolling files there, as JSON lines when `json` is set,
    /// keeping at most `max_files` of them.
    ///
    /// # Errors
    /// Same as [`LoggerBuilder::init`].
    pub fn from_config(name: impl Into<String>, config: &LoggingConfig) -> Result<Self, LoggerError> {
        let builder = Self::builder().name(name).env_filter(config.level.as_str());
        match &config.directory {
            Some(dir) => builder.path(dir).max_files(config.max_files).json(config.json).init(),
            None => builder.init(),
        }
    }

    /// Runs `f` with a temporary stderr subscriber filtered by `directives`.
    ///
    /// Nothing is installed globally, so [`Logger::from_config`] can still run
    /// once the settings loaded inside `f` are known.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] if `directives` do not parse.
    pub fn scoped<T>(directives: &str, f: impl FnOnce() -> T) -> Result<T, LoggerError> {
        let filter = parse_filter(LevelFilter::INFO, Some(directives))?;
        let subscriber = tracing_subscriber::registry().with(filter).with(console_layer());
        Ok(tracing::subscriber::with_default(subscriber, f))
    }

    /// `true` when records are also written to rolling files.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.file_guard.is_some()
    }
}

fn console_layer<S>() -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    layer().compact().with_writer(io::stderr).with_ansi(true).boxed()
}

fn file_layer<S>(
    name: &str,
    dir: &Path,
    settings: &LoggerSettings,
) -> Result<(BoxedLayer<S>, WorkerGuard), LoggerError>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    fs::create_dir_all(dir).map_err(|e| LoggerError::Internal {
        message: e.to_string().into(),
        context: Some(format!("Failed to create log directory {}", dir.display()).into()),
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(ROTATION)
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(settings.max_files)
        .build(dir)
        .context("Failed to open log directory")?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let plain = layer().with_writer(writer).with_ansi(false);
    let boxed = if settings.json { plain.json().boxed() } else { plain.boxed() };
    Ok((boxed, guard))
}

fn validate(settings: &LoggerSettings, name: &str) -> Result<(), LoggerError> {
    let message = if name.trim().is_empty() {
        "Logger name cannot be empty"
    } else if settings.max_files == 0 {
        "max_files must be greater than zero"
    } else {
        return Ok(());
    };
    Err(LoggerError::InvalidConfiguration { message: message.into(), context: None })
}

/// Explicit directives replace `RUST_LOG`; without them `RUST_LOG` is read on top of `default`.
fn parse_filter(default: LevelFilter, directives: Option<&str>) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(default.into());
    let Some(directives) = directives else {
        return Ok(builder.from_env_lossy());
    };
    builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
        message: format!("Invalid filter '{directives}': {e}").into(),
        context: None,
    })
}
